//! Arrow types as flat text.
//!
//! Both operations first drop every parenthesis and read the type as a
//! left-to-right chain of `->`-separated parts, so `((a->b)->c)` and
//! `(a->(b->c))` both read as `a`, `b`, `c`.

use thiserror::Error;

/// The argument type is not the first part of the function type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{function} vs {argument}")]
pub struct Mismatch {
    pub function: String,
    pub argument: String,
}

/// Splits a type at the middle of its arrow chain.
///
/// The earlier half gets the extra part on odd counts. Halves with more than
/// one part are parenthesized; a type without any arrow is returned as both
/// halves.
///
/// ```
/// use hmlabel_core::types::halve;
///
/// assert_eq!(halve("a->b->c"), ("a".to_string(), "(b->c)".to_string()));
/// assert_eq!(halve("N"), ("N".to_string(), "N".to_string()));
/// ```
pub fn halve(ty: &str) -> (String, String) {
    let flat = strip_parens(ty);
    if !flat.contains("->") {
        return (flat.clone(), flat);
    }
    let parts = split_arrows(&flat);
    let middle = parts.len() / 2;
    (join_half(&parts[..middle]), join_half(&parts[middle..]))
}

/// Removes `argument` from the front of `function`'s arrow chain.
///
/// The remainder is always wrapped in one pair of parentheses, even when a
/// single part is left: `subtract_prefix("(a->b)", "a")` is `"(b)"`.
pub fn subtract_prefix(function: &str, argument: &str) -> Result<String, Mismatch> {
    let flat = strip_parens(function);
    let parts = split_arrows(&flat);
    match parts.split_first() {
        Some((first, rest)) if *first == argument => Ok(format!("({})", rest.join("->"))),
        _ => Err(Mismatch {
            function: function.to_string(),
            argument: argument.to_string(),
        }),
    }
}

fn strip_parens(ty: &str) -> String {
    ty.replace(['(', ')'], "")
}

fn split_arrows(flat: &str) -> Vec<&str> {
    flat.split("->").map(str::trim).collect()
}

fn join_half(parts: &[&str]) -> String {
    match parts {
        [single] => single.to_string(),
        _ => format!("({})", parts.join("->")),
    }
}
