//! # eval.rs
//!
//! The dual-stack shunting-yard driver, the operator evaluator and the
//! finalizer.
//!
//! The driver keeps an operator stack in strictly ascending precedence order
//! (enforced here, not by the stack itself) and an operand stack of `f64`
//! values. On every scanned token it pops and applies dominated operators
//! before pushing the new one; a right parenthesis closes groupings and
//! function calls lazily, when it is itself popped. Both stacks live and die
//! inside one [`evaluate`] call, so evaluation is stateless and reentrant.

use crate::errors::EvalError;
use crate::normalize::normalize;
use crate::token::{find_operator, read_operand, Op};

/// Evaluates a raw expression string to a single value.
///
/// Runs the full pipeline: normalization, operator scanning, shunting-yard
/// reduction and the final drain. The sole entry point behind
/// [`crate::evaluate`].
pub(crate) fn evaluate(expression: &str) -> Result<f64, EvalError> {
    // Scanning works on lowercased text; for ASCII lowercasing the byte
    // indices of the original are preserved, so slicing stays valid.
    let text = normalize(expression).to_ascii_lowercase();

    let mut operators: Vec<Op> = Vec::new();
    let mut operands: Vec<f64> = Vec::new();
    let mut cursor = 0;

    while let Some((op, range)) = find_operator(&text, cursor) {
        if range.start > cursor {
            operands.push(read_operand(&text[cursor..range.start])?);
        }
        cursor = range.end;
        process_operator(op, &mut operators, &mut operands)?;
    }

    // No more operators; the trailing text (if any) must be a final operand.
    if cursor < text.len() {
        operands.push(read_operand(&text[cursor..])?);
    }

    finalize(&mut operators, &mut operands)
}

/// Whether the stack-top operator must be applied before `incoming` can be
/// pushed.
///
/// Grouping openers and commas act as precedence barriers: they never
/// dominate and are only removed by an explicit closure. A right parenthesis
/// left on the stack always dominates, forcing the closure it stands for.
/// Everything else compares precedence classes; equal precedence pops
/// left-to-right, which makes `+ - * / ^` left-associative.
fn dominates(top: Op, incoming: Op) -> bool {
    if top.is_opener() || top == Op::Comma {
        false
    } else if top == Op::RParen {
        true
    } else {
        top.precedence() >= incoming.precedence()
    }
}

/// Pops and applies every dominated stack-top operator, then pushes `op`.
fn process_operator(op: Op, operators: &mut Vec<Op>, operands: &mut Vec<f64>) -> Result<(), EvalError> {
    while let Some(&top) = operators.last() {
        if !dominates(top, op) {
            break;
        }
        operators.pop();
        apply_operator(top, operators, operands)?;
    }
    operators.push(op);
    Ok(())
}

/// Applies one popped operator to the operand stack.
///
/// Function openers apply their function here: `sin(`/`cos(`/`tan(` pop one
/// operand, `pow(`/`log(` pop two. Only the bare `(` is a no-op, and a comma
/// reaching this point was never consumed by a closing parenthesis.
fn apply_operator(op: Op, operators: &mut Vec<Op>, operands: &mut Vec<f64>) -> Result<(), EvalError> {
    match op {
        Op::Add => {
            let (a, b) = pop_pair(operands)?;
            operands.push(a + b);
        }
        Op::Sub => {
            let (a, b) = pop_pair(operands)?;
            operands.push(a - b);
        }
        Op::Mul => {
            let (a, b) = pop_pair(operands)?;
            operands.push(a * b);
        }
        Op::Div => {
            let (a, b) = pop_pair(operands)?;
            operands.push(a / b);
        }
        Op::Pow | Op::PowFn => {
            let (a, b) = pop_pair(operands)?;
            operands.push(a.powf(b));
        }
        Op::Factorial => {
            let operand = pop_one(operands)?;
            if operand < 0.0 || operand != (operand as u64) as f64 {
                return Err(EvalError::InvalidOperation);
            }
            operands.push(factorial(operand as u64));
        }
        Op::Sin => {
            let operand = pop_one(operands)?;
            operands.push(operand.sin());
        }
        Op::Cos => {
            let operand = pop_one(operands)?;
            operands.push(operand.cos());
        }
        Op::Tan => {
            let operand = pop_one(operands)?;
            operands.push(operand.tan());
        }
        Op::Log => {
            let (base, value) = pop_pair(operands)?;
            if base <= 0.0 || base == 1.0 || value <= 0.0 {
                return Err(EvalError::InvalidOperation);
            }
            operands.push(value.ln() / base.ln());
        }
        Op::LParen => {}
        Op::Comma => return Err(EvalError::CommaNotInFunction),
        Op::RParen => close_group(operators, operands)?,
    }
    Ok(())
}

/// Closes the innermost grouping for a popped right parenthesis.
///
/// Discards the pending commas of the argument list, then evaluates the
/// opener they belong to (which applies the function for `sin(` etc. and is
/// a no-op for `(`). Exhausting the stack, or finding a non-opener under the
/// commas, means the parenthesis had no matching opener.
fn close_group(operators: &mut Vec<Op>, operands: &mut Vec<f64>) -> Result<(), EvalError> {
    loop {
        let top = operators.pop().ok_or(EvalError::UnpairedParenthesis)?;
        if top == Op::Comma {
            continue;
        }
        if top.is_opener() {
            return apply_operator(top, operators, operands);
        }
        return Err(EvalError::UnpairedParenthesis);
    }
}

/// Drains the remaining operators, then checks that exactly one operand is
/// left: the result.
fn finalize(operators: &mut Vec<Op>, operands: &mut Vec<f64>) -> Result<f64, EvalError> {
    while let Some(op) = operators.pop() {
        apply_operator(op, operators, operands)?;
    }

    match operands.pop() {
        Some(value) if operands.is_empty() => Ok(value),
        _ => Err(EvalError::FinalizationFailed),
    }
}

fn pop_one(operands: &mut Vec<f64>) -> Result<f64, EvalError> {
    operands.pop().ok_or(EvalError::MalformedExpression)
}

/// Pops the right operand first, then the left one, matching push order.
fn pop_pair(operands: &mut Vec<f64>) -> Result<(f64, f64), EvalError> {
    let b = operands.pop().ok_or(EvalError::MalformedExpression)?;
    let a = operands.pop().ok_or(EvalError::MalformedExpression)?;
    Ok((a, b))
}

/// Factorial as a descending product; `0!` and `1!` are both `1`.
fn factorial(operand: u64) -> f64 {
    let mut result = 1.0;
    let mut n = operand;
    while n > 1 {
        result *= n as f64;
        n -= 1;
    }
    result
}
