//! # errors.rs
//!
//! Error taxonomy of the expression evaluator.
//!
//! Every fallible step of the pipeline reports one of these variants and the
//! first failure aborts the whole evaluation; nothing is retried and no
//! partial result survives.

use std::fmt;

/// Why an evaluation failed.
///
/// Each variant maps 1:1 to a condition checked by the evaluator. The mapping
/// from variant to its stable name is a pure function ([`EvalError::name`]),
/// so callers that want the machine-readable kind (e.g. the REPL) do not have
/// to go through `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// An operator was applied with too few operands on the stack.
    MalformedExpression,

    /// A comma was evaluated outside of a function argument list.
    CommaNotInFunction,

    /// A closing parenthesis had no matching opener.
    UnpairedParenthesis,

    /// A piece of text could not be interpreted as a number or constant.
    ParsingFailed,

    /// After the final drain the operand stack did not hold exactly one value.
    FinalizationFailed,

    /// An operator's mathematical domain was violated.
    InvalidOperation,

    /// Guard variant for unreachable states.
    InternalFailure,
}

impl EvalError {
    /// Returns the stable kind name of this error.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MalformedExpression => "MalformedExpression",
            Self::CommaNotInFunction => "CommaNotInFunction",
            Self::UnpairedParenthesis => "UnpairedParenthesis",
            Self::ParsingFailed => "ParsingFailed",
            Self::FinalizationFailed => "FinalizationFailed",
            Self::InvalidOperation => "InvalidOperation",
            Self::InternalFailure => "InternalFailure",
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MalformedExpression => write!(f, "Operator is missing an operand"),
            Self::CommaNotInFunction => write!(f, "Comma used outside of a function call"),
            Self::UnpairedParenthesis => write!(f, "Closing parenthesis has no matching opener"),
            Self::ParsingFailed => write!(f, "Failed to parse text as a number"),
            Self::FinalizationFailed => write!(f, "Expression did not reduce to a single value"),
            Self::InvalidOperation => write!(f, "Operand outside the operator's domain"),
            Self::InternalFailure => write!(f, "Internal evaluator failure"),
        }
    }
}

impl std::error::Error for EvalError {}
