//! Grammar screening after the denylist
//!
//! meval accepts more than the formula grammar: `%`, `!` and arbitrary
//! function names that only fail once evaluated. Both are rejected here so
//! they surface as `parse_error` at compile time.

use crate::features::formula::domain::FUNCTIONS;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref OUTSIDE_GRAMMAR: Regex =
        Regex::new(r"[^A-Za-z0-9_.\s+\-*/^(),]").expect("grammar pattern is a valid regex");
    static ref CALL: Regex =
        Regex::new(r"\b([A-Za-z_][A-Za-z0-9_]*)\s*\(").expect("call pattern is a valid regex");
}

/// Why `expression` falls outside the grammar, if it does
pub fn grammar_violation(expression: &str) -> Option<String> {
    if let Some(m) = OUTSIDE_GRAMMAR.find(expression) {
        return Some(format!("unsupported operator '{}'", m.as_str()));
    }
    CALL.captures_iter(expression)
        .filter_map(|c| c.get(1))
        .map(|name| name.as_str())
        .find(|name| !FUNCTIONS.contains(name))
        .map(|name| format!("unknown function '{}'", name))
}
