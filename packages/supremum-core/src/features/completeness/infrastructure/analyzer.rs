//! Completeness / compactness analysis
//!
//! A set is reported complete when every Cauchy sequence's apparent limit
//! lies in the set, every finite open endpoint is covered by another
//! component, and (under ℚ) neither bound falls in the irrational gap.

use super::cauchy::{apparent_limit, is_cauchy};
use super::membership::MembershipIndex;
use super::rational_gap::detect_gap;
use crate::config::HeuristicConfig;
use crate::features::bounds::UnionBounds;
use crate::features::completeness::domain::CompletenessReport;
use crate::features::materialize::Materialization;
use crate::shared::models::{ExtendedReal, SequenceReport, Universe};
use tracing::debug;

pub struct CompletenessAnalyzer<'a> {
    heuristics: &'a HeuristicConfig,
}

impl<'a> CompletenessAnalyzer<'a> {
    pub fn new(heuristics: &'a HeuristicConfig) -> Self {
        Self { heuristics }
    }

    pub fn analyze(
        &self,
        materialization: &Materialization,
        bounds: &UnionBounds,
        universe: Universe,
    ) -> CompletenessReport {
        let membership = MembershipIndex::new(materialization, self.heuristics.membership_tolerance);

        let sequences: Vec<SequenceReport> = materialization
            .sequences()
            .map(|(index, samples)| {
                let cauchy = is_cauchy(&samples.terms, self.heuristics);
                let limit = apparent_limit(samples);
                SequenceReport {
                    index,
                    terms: samples.terms.len(),
                    is_cauchy: cauchy,
                    apparent_limit: limit,
                    limit_in_set: limit.filter(|_| cauchy).map(|l| membership.contains(l)),
                }
            })
            .collect();

        let limits_contained = sequences.iter().all(|s| s.limit_in_set != Some(false));
        let missing = membership.missing_limit_points();
        if !missing.is_empty() {
            debug!("Open endpoints outside the set: {:?}", missing);
        }

        let tolerance = self.heuristics.irrational_tolerance;
        let sup_gap = detect_gap(bounds.sup.and_then(ExtendedReal::finite), universe, tolerance);
        let inf_gap = detect_gap(bounds.inf.and_then(ExtendedReal::finite), universe, tolerance);

        let is_cauchy = (!sequences.is_empty()).then(|| sequences.iter().all(|s| s.is_cauchy));
        let converges_to = match sequences.as_slice() {
            [only] if only.is_cauchy => only.apparent_limit,
            _ => None,
        };

        CompletenessReport {
            is_complete: limits_contained && missing.is_empty() && !sup_gap && !inf_gap,
            sequences,
            is_cauchy,
            converges_to,
            sup_gap,
            inf_gap,
        }
    }
}
