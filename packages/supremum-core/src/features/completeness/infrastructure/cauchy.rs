//! Cauchy heuristic and apparent limits
//!
//! Comparing the last two generated terms is not a proof of convergence;
//! it only separates settling sequences from oscillating or growing ones.

use crate::config::HeuristicConfig;
use crate::features::materialize::SequenceSamples;

pub fn is_cauchy(terms: &[f64], heuristics: &HeuristicConfig) -> bool {
    match terms {
        [.., prev, last] if terms.len() >= heuristics.cauchy_min_terms => {
            (last - prev).abs() < heuristics.cauchy_threshold
        }
        _ => false,
    }
}

/// Analytic limit for catalogued sequences, otherwise the last generated term
pub fn apparent_limit(samples: &SequenceSamples) -> Option<f64> {
    match &samples.analytic {
        Some(profile) => profile.limit,
        None => samples.terms.last().copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::SequencePreset;

    fn heuristics() -> HeuristicConfig {
        HeuristicConfig::default()
    }

    #[test]
    fn test_reciprocal_terms_are_cauchy() {
        let terms: Vec<f64> = (1..=20).map(|n| 1.0 / n as f64).collect();
        assert!(is_cauchy(&terms, &heuristics()));
    }

    #[test]
    fn test_too_few_terms() {
        assert!(!is_cauchy(&[1.0, 1.0, 1.0, 1.0, 1.0], &heuristics()));
        assert!(!is_cauchy(&[], &heuristics()));
    }

    #[test]
    fn test_oscillation_and_growth_rejected() {
        let alternating: Vec<f64> = (1..=10).map(|n| if n % 2 == 0 { 1.0 } else { -1.0 }).collect();
        assert!(!is_cauchy(&alternating, &heuristics()));
        let natural: Vec<f64> = (1..=10).map(|n| n as f64).collect();
        assert!(!is_cauchy(&natural, &heuristics()));
    }

    #[test]
    fn test_apparent_limit_prefers_analytic() {
        let preset = SequenceSamples {
            preset: Some(SequencePreset::Euler),
            analytic: Some(SequencePreset::Euler.analytic(1)),
            terms: vec![2.0, 2.25],
            window: Vec::new(),
            tail: Vec::new(),
        };
        assert_eq!(apparent_limit(&preset), Some(std::f64::consts::E));

        let custom = SequenceSamples {
            analytic: None,
            preset: None,
            ..preset
        };
        assert_eq!(apparent_limit(&custom), Some(2.25));
    }
}
