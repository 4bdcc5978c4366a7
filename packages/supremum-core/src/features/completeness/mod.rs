//! Completeness Feature
//!
//! Heuristic Cauchy detection, limit membership, closure of open endpoints
//! and the pedagogical rational-universe gap. Compactness follows from
//! Heine–Borel: bounded both ways and complete.

pub mod domain;
pub mod infrastructure;

pub use domain::{match_irrational, CompletenessReport, IRRATIONALS};
pub use infrastructure::{
    apparent_limit, detect_gap, is_cauchy, CompletenessAnalyzer, MembershipIndex,
};
