//! Completeness domain models

use crate::shared::models::SequenceReport;
use std::f64::consts::{E, PI, SQRT_2};

/// Irrationals recognised by the rational-universe gap check
pub const IRRATIONALS: &[(&str, f64)] = &[
    ("√2", SQRT_2),
    ("π", PI),
    ("e", E),
    ("√3", 1.732_050_807_568_877_2),
    ("√5", 2.236_067_977_499_79),
];

/// Catalogue entry within `tolerance` of `|value|`
pub fn match_irrational(value: f64, tolerance: f64) -> Option<&'static str> {
    IRRATIONALS
        .iter()
        .find(|(_, c)| (value.abs() - c).abs() <= tolerance)
        .map(|(name, _)| *name)
}

/// Findings of the completeness stage
#[derive(Debug, Clone, PartialEq)]
pub struct CompletenessReport {
    pub sequences: Vec<SequenceReport>,
    /// `Some(all Cauchy)` when the set has sequences
    pub is_cauchy: Option<bool>,
    /// Limit of the only sequence, when it is Cauchy
    pub converges_to: Option<f64>,
    pub is_complete: bool,
    /// Supremum matched an irrational under the rational universe
    pub sup_gap: bool,
    pub inf_gap: bool,
}

impl CompletenessReport {
    pub fn completeness_gap(&self) -> bool {
        self.sup_gap || self.inf_gap
    }
}
