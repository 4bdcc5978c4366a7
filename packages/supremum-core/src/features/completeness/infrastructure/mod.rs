//! Completeness infrastructure

mod analyzer;
mod cauchy;
mod membership;
mod rational_gap;

pub use analyzer::CompletenessAnalyzer;
pub use cauchy::{apparent_limit, is_cauchy};
pub use membership::MembershipIndex;
pub use rational_gap::detect_gap;
