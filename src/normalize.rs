//! # normalize.rs
//!
//! Expression normalization, the first stage of the pipeline.
//!
//! Normalization removes whitespace, folds runs of adjacent `+`/`-` signs to
//! their fixed point, and rewrites the remaining unary signs into binary form
//! against an implicit `0`. After this stage the rest of the pipeline only
//! ever sees binary arithmetic operators, postfix `!` and prefix functions.

/// Sign-folding rules, applied repeatedly until none of them matches.
///
/// The rules are confluent on a run of signs, so the application order does
/// not affect the fixed point.
const SIGN_FOLDS: [(&str, &str); 4] = [("++", "+"), ("+-", "-"), ("-+", "-"), ("--", "+")];

/// Normalizes an expression for scanning.
///
/// # Arguments
///
/// * `expression` - The raw expression text.
///
/// # Returns
///
/// The normalized text: no whitespace, no adjacent sign pairs, and every
/// unary sign rewritten as a binary operation on `0`:
///
/// * a leading `+` is dropped, a leading `-` becomes `0-`;
/// * `(+` becomes `(`, `(-` becomes `(0-` (this also covers function
///   openers, whose token ends with `(`).
///
/// Normalizing already-normalized text is a no-op.
pub(crate) fn normalize(expression: &str) -> String {
    let mut text: String = expression.chars().filter(|ch| !ch.is_whitespace()).collect();

    loop {
        let mut changed = false;
        for (pattern, replacement) in SIGN_FOLDS {
            while text.contains(pattern) {
                text = text.replace(pattern, replacement);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    if let Some(rest) = text.strip_prefix('+') {
        text = rest.to_string();
    } else if text.starts_with('-') {
        text.insert(0, '0');
    }

    while text.contains("(+") {
        text = text.replace("(+", "(");
    }
    while text.contains("(-") {
        text = text.replace("(-", "(0-");
    }

    text
}
