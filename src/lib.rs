//! # exprcalc
//!
//! `exprcalc` is a Rust library for evaluating arithmetic expressions with
//! numbers, `+ - * / ^ !`, parentheses, the named constants `e` and `pi`,
//! and the functions `sin`, `cos`, `tan`, `pow` and `log` (multi-argument
//! functions take comma-separated arguments).
//!
//! ## Overview
//! - Evaluate a line of text straight to an `f64`, or get a descriptive
//!   [`EvalError`] telling exactly which rule the input broke.
//! - Standard precedence and left-associativity, parenthesized grouping,
//!   postfix factorial and prefix functions.
//! - Unary signs are normalized away up front (`--5` is `5`, `-5` is `0-5`),
//!   so the evaluator core only ever deals with binary arithmetic.
//!
//! Internally, an expression is first normalized, then scanned left-to-right
//! for operator tokens, and reduced on the fly with the classic dual-stack
//! shunting-yard algorithm; no parse tree is built.
//!
//! ## Example
//! ```rust
//! assert_eq!(exprcalc::evaluate("2 + 3 * 4"), Ok(14.0));
//! assert_eq!(exprcalc::evaluate("5!"), Ok(120.0));
//! assert_eq!(
//!     exprcalc::evaluate("(-1)!"),
//!     Err(exprcalc::EvalError::InvalidOperation)
//! );
//! ```
//!
//! Evaluation is stateless: every call builds its own stacks and discards
//! them on exit, success or failure, so the function is freely reentrant.

mod eval;
pub mod errors;
mod normalize;
mod token;

pub use errors::EvalError;

/// Evaluates an arithmetic expression to a double-precision value.
///
/// This is the sole entry point of the crate. The input is normalized
/// (whitespace stripped, sign runs folded, unary signs rewritten against an
/// implicit `0`), scanned for operator tokens case-insensitively, and reduced
/// with a dual-stack shunting-yard driver.
///
/// # Arguments
///
/// * `expression` - The expression text, e.g. `"pow(2, 3) + pi"`.
///
/// # Returns
///
/// * `Ok(f64)` with the single remaining operand on success.
/// * `Err(EvalError)` describing the first rule the input broke.
///
/// # Example
/// ```rust
/// use exprcalc::{evaluate, EvalError};
///
/// assert_eq!(evaluate("10 - 2 - 3"), Ok(5.0));
/// assert_eq!(evaluate("1,2"), Err(EvalError::CommaNotInFunction));
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    eval::evaluate(expression)
}

#[cfg(test)]
mod evaluate_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_single_number() {
        assert_eq!(evaluate("42"), Ok(42.0));
        assert_eq!(evaluate("2.5"), Ok(2.5));
        assert_eq!(evaluate("1e5"), Ok(1.0e5));
    }

    #[test]
    fn test_named_constants() {
        assert_abs_diff_eq!(evaluate("pi").unwrap(), 3.14159265359, epsilon = 1.0e-10);
        assert_abs_diff_eq!(evaluate("e").unwrap(), 2.71828182846, epsilon = 1.0e-10);
        // matching is case-insensitive
        assert_eq!(evaluate("PI"), evaluate("pi"));
        assert_eq!(evaluate("E"), evaluate("e"));
    }

    #[test]
    fn test_precedence_and_associativity() {
        assert_eq!(evaluate("2+3*4"), Ok(14.0));
        assert_eq!(evaluate("10-2-3"), Ok(5.0));
        assert_eq!(evaluate("20/4/5"), Ok(1.0));
        assert_eq!(evaluate("1+2*3-4"), Ok(3.0));
        // equal precedence pops left-to-right, '^' included
        assert_eq!(evaluate("2^3^2"), Ok(64.0));
    }

    #[test]
    fn test_parenthesized_grouping() {
        assert_eq!(evaluate("(2+3)*4"), Ok(20.0));
        assert_eq!(evaluate("2*(3+4)"), Ok(14.0));
        assert_eq!(evaluate("((1+2))*3"), Ok(9.0));
        assert_eq!(evaluate("(5)"), Ok(5.0));
    }

    #[test]
    fn test_unary_sign_normalization() {
        assert_eq!(evaluate("-5+3"), Ok(-2.0));
        assert_eq!(evaluate("--5"), Ok(5.0));
        assert_eq!(evaluate("-+5"), Ok(-5.0));
        assert_eq!(evaluate("2*(-3)"), Ok(-6.0));
        // '*' directly followed by a sign is not part of the grammar
        assert_eq!(evaluate("3*-2"), Err(EvalError::MalformedExpression));
    }

    #[test]
    fn test_factorial() {
        assert_eq!(evaluate("5!"), Ok(120.0));
        assert_eq!(evaluate("0!"), Ok(1.0));
        assert_eq!(evaluate("3!+1"), Ok(7.0));
        assert_eq!(evaluate("(2+1)!"), Ok(6.0));
        assert_eq!(evaluate("(-1)!"), Err(EvalError::InvalidOperation));
        assert_eq!(evaluate("2.5!"), Err(EvalError::InvalidOperation));
    }

    #[test]
    fn test_power() {
        assert_eq!(evaluate("2^10"), Ok(1024.0));
        assert_abs_diff_eq!(evaluate("2^0.5").unwrap(), std::f64::consts::SQRT_2, epsilon = 1.0e-12);
    }

    #[test]
    fn test_trigonometric_functions() {
        assert_abs_diff_eq!(evaluate("sin(0)").unwrap(), 0.0, epsilon = 1.0e-12);
        assert_abs_diff_eq!(evaluate("sin(pi/2)").unwrap(), 1.0, epsilon = 1.0e-12);
        assert_abs_diff_eq!(evaluate("cos(0)").unwrap(), 1.0, epsilon = 1.0e-12);
        assert_abs_diff_eq!(evaluate("cos(pi)").unwrap(), -1.0, epsilon = 1.0e-12);
        assert_abs_diff_eq!(evaluate("tan(pi/4)").unwrap(), 1.0, epsilon = 1.0e-12);
        // function names match case-insensitively
        assert_eq!(evaluate("SIN(1)"), evaluate("sin(1)"));
    }

    #[test]
    fn test_multi_argument_functions() {
        assert_abs_diff_eq!(evaluate("pow(2,3)").unwrap(), 8.0, epsilon = 1.0e-12);
        assert_abs_diff_eq!(evaluate("log(2,8)").unwrap(), 3.0, epsilon = 1.0e-12);
        assert_abs_diff_eq!(evaluate("log(10, 1000)").unwrap(), 3.0, epsilon = 1.0e-9);
        // nested calls close innermost-first
        assert_abs_diff_eq!(evaluate("pow(2,pow(2,2))").unwrap(), 16.0, epsilon = 1.0e-12);
        assert_abs_diff_eq!(evaluate("sin(cos(0))").unwrap(), 1.0_f64.sin(), epsilon = 1.0e-12);
    }

    #[test]
    fn test_functions_mixed_with_arithmetic() {
        assert_abs_diff_eq!(evaluate("2*sin(pi/2)+1").unwrap(), 3.0, epsilon = 1.0e-12);
        assert_abs_diff_eq!(evaluate("pow(2,3)!").unwrap(), 40320.0, epsilon = 1.0e-6);
    }

    #[test]
    fn test_invalid_operations() {
        assert_eq!(evaluate("log(1,8)"), Err(EvalError::InvalidOperation));
        assert_eq!(evaluate("log(0,8)"), Err(EvalError::InvalidOperation));
        assert_eq!(evaluate("log(2,0)"), Err(EvalError::InvalidOperation));
    }

    #[test]
    fn test_division_by_zero_is_not_an_error() {
        assert!(evaluate("1/0").unwrap().is_infinite());
    }

    #[test]
    fn test_comma_outside_function() {
        assert_eq!(evaluate("1,2"), Err(EvalError::CommaNotInFunction));
        assert_eq!(evaluate("pow(2,3"), Err(EvalError::CommaNotInFunction));
    }

    #[test]
    fn test_unpaired_parenthesis() {
        assert_eq!(evaluate(")1+2"), Err(EvalError::UnpairedParenthesis));
        assert_eq!(evaluate("1+2)"), Err(EvalError::UnpairedParenthesis));
        assert_eq!(evaluate("(1,2))"), Err(EvalError::UnpairedParenthesis));
        // commas discarded by a bare paren leave both operands behind
        assert_eq!(evaluate("(1,2)"), Err(EvalError::FinalizationFailed));
    }

    #[test]
    fn test_unclosed_opener_drains_silently() {
        // a '(' left on the stack is a no-op during the drain
        assert_eq!(evaluate("(1+2"), Ok(3.0));
        // an unclosed function opener still applies during the drain
        assert_abs_diff_eq!(evaluate("sin(2").unwrap(), 2.0_f64.sin(), epsilon = 1.0e-12);
        // with no operand at all the drained opener underflows
        assert_eq!(evaluate("sin("), Err(EvalError::MalformedExpression));
        assert_eq!(evaluate("pow("), Err(EvalError::MalformedExpression));
    }

    #[test]
    fn test_malformed_expressions() {
        assert_eq!(evaluate("*5"), Err(EvalError::MalformedExpression));
        assert_eq!(evaluate("5+"), Err(EvalError::MalformedExpression));
        assert_eq!(evaluate("1(2)"), Err(EvalError::FinalizationFailed));
        // a lone '+' normalizes to the empty expression
        assert_eq!(evaluate("+"), Err(EvalError::FinalizationFailed));
        assert_eq!(evaluate(""), Err(EvalError::FinalizationFailed));
        assert_eq!(evaluate("   "), Err(EvalError::FinalizationFailed));
    }

    #[test]
    fn test_parsing_failures() {
        assert_eq!(evaluate("abc"), Err(EvalError::ParsingFailed));
        assert_eq!(evaluate("2x+1"), Err(EvalError::ParsingFailed));
        // the scan splits a signed exponent at its sign
        assert_eq!(evaluate("1e+5"), Err(EvalError::ParsingFailed));
    }

    #[test]
    fn test_whitespace_insensitive() {
        assert_eq!(evaluate(" 2 + 3 * 4 "), Ok(14.0));
        assert_eq!(evaluate("pow( 2 , 3 )"), evaluate("pow(2,3)"));
        // stripping runs first, so separated digits merge into one literal
        assert_eq!(evaluate("1 2"), Ok(12.0));
    }

    #[test]
    fn test_reentrant_across_calls() {
        // a failed call leaks no state into the next one
        assert_eq!(evaluate("*5"), Err(EvalError::MalformedExpression));
        assert_eq!(evaluate("2+3"), Ok(5.0));
        assert_eq!(evaluate("2+3"), Ok(5.0));
    }
}
