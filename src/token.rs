//! # token.rs
//!
//! The closed operator enumeration and the scanner that locates operator
//! tokens and parses operand text.
//!
//! Scanning is not a conventional left-to-right lexer: every surface token
//! string is searched for in the remaining text and the one with the earliest
//! starting index wins. Ties between tokens found at the same index are broken
//! by declaration order, never by token length; `Op::ALL` therefore fixes the
//! observable scan behavior.

use crate::errors::EvalError;
use phf::Map;
use phf_macros::phf_map;
use std::ops::Range;

/// The precedence tier shared by `(` and every function opener.
pub(crate) const GROUP_PRECEDENCE: u8 = 5;

#[doc(hidden)]
/// Internal macro defining the operator enumeration.
///
/// It centralizes the variants, their surface token strings and their
/// precedence classes in one place, and emits `Op::ALL` in declaration order
/// so the scanner's tie-break stays in lockstep with the enum.
macro_rules! operators {
    ($( $variant:ident => { token: $token:expr, precedence: $prec:expr } ),* $(,)?) => {
        /// An operator of the expression grammar.
        ///
        /// Function openers carry their trailing `(` in the token string
        /// (e.g. `"sin("`) and share the grouping precedence tier with
        /// [`Op::LParen`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub(crate) enum Op {
            $( $variant, )*
        }

        impl Op {
            /// All operators in declaration order.
            pub const ALL: &'static [Op] = &[ $( Op::$variant, )* ];

            /// Returns the surface token string, matched case-insensitively.
            pub fn token(&self) -> &'static str {
                match self {
                    $( Self::$variant => $token, )*
                }
            }

            /// Returns the precedence class (higher binds tighter).
            pub fn precedence(&self) -> u8 {
                match self {
                    $( Self::$variant => $prec, )*
                }
            }
        }

        impl std::fmt::Display for Op {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.token())
            }
        }
    };
}

operators! {
    Add       => { token: "+",    precedence: 1 },
    Sub       => { token: "-",    precedence: 1 },
    Mul       => { token: "*",    precedence: 2 },
    Div       => { token: "/",    precedence: 2 },
    Pow       => { token: "^",    precedence: 3 },
    Factorial => { token: "!",    precedence: 4 },
    LParen    => { token: "(",    precedence: 5 },
    Sin       => { token: "sin(", precedence: 5 },
    Cos       => { token: "cos(", precedence: 5 },
    Tan       => { token: "tan(", precedence: 5 },
    PowFn     => { token: "pow(", precedence: 5 },
    Log       => { token: "log(", precedence: 5 },
    Comma     => { token: ",",    precedence: 0 },
    RParen    => { token: ")",    precedence: 0 },
}

impl Op {
    /// Whether this operator opens a grouping (a plain `(` or any function
    /// opener). Openers act as barriers to automatic operator reduction until
    /// explicitly closed.
    pub fn is_opener(&self) -> bool {
        self.precedence() == GROUP_PRECEDENCE
    }
}

/// Map of named constant operands. Looked up with lowercased text, which
/// makes the match case-insensitive.
static CONSTANTS: Map<&'static str, f64> = phf_map! {
    "e" => std::f64::consts::E,
    "pi" => std::f64::consts::PI,
};

/// Locates the next operator token at or after `from`.
///
/// Expects ASCII-lowercased text; all token strings are lowercase ASCII, so
/// searching lowercased text is what makes the match case-insensitive.
///
/// # Arguments
///
/// * `text` - The normalized, lowercased expression.
/// * `from` - Byte index to start scanning at.
///
/// # Returns
///
/// The operator whose token starts earliest, together with the byte range it
/// occupies, or `None` when no token occurs in the remaining text. Ties are
/// won by the first-declared operator.
pub(crate) fn find_operator(text: &str, from: usize) -> Option<(Op, Range<usize>)> {
    let tail = &text[from..];
    let mut found: Option<(Op, Range<usize>)> = None;

    for &op in Op::ALL {
        if let Some(position) = tail.find(op.token()) {
            let start = from + position;
            if found.as_ref().map_or(true, |(_, range)| start < range.start) {
                found = Some((op, start..start + op.token().len()));
            }
        }
    }

    found
}

/// Parses the text between two operator tokens as an operand.
///
/// The whole text must parse as an `f64`, or equal one of the named constants
/// (case-insensitively); any leftover suffix is a failure.
pub(crate) fn read_operand(text: &str) -> Result<f64, EvalError> {
    if let Ok(value) = text.parse::<f64>() {
        return Ok(value);
    }
    if let Some(value) = CONSTANTS.get(text.to_ascii_lowercase().as_str()) {
        return Ok(*value);
    }
    Err(EvalError::ParsingFailed)
}
