//! Host-escape denylist
//!
//! Checked against the raw formula text before any parsing happens. The
//! grammar could not express these anyway; rejecting them early gives a
//! distinct `unsafe_expression` reason instead of a generic parse error.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DENYLIST: Regex = Regex::new(
        r"(?i)\b(import|require|process|eval|function|constructor|prototype|__proto__|window|document|global|globalthis|this|fetch|exec|system|spawn|open|new|delete|while|for|return)\b|=>|[;`{}\[\]\\$=@#'\x22]"
    )
    .expect("denylist pattern is a valid regex");
}

/// First denylisted token in `expression`, if any
pub fn find_unsafe_token(expression: &str) -> Option<String> {
    DENYLIST
        .find(expression)
        .map(|m| m.as_str().to_string())
}
