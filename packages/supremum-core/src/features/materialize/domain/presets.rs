//! Analytic table for catalogued sequences
//!
//! Asymptotic behaviour cannot be inferred soundly from finitely many
//! samples, so the catalogue carries closed-form sup/inf/attainment/limit
//! for the infinite tail starting at index `s`.

use super::{AnalyticProfile, AnalyticSide};
use crate::shared::models::SequencePreset;
use std::f64::consts::{E, SQRT_2};

impl SequencePreset {
    /// Formula in the index variable `n`, used to generate points
    pub fn formula(&self) -> &'static str {
        match self {
            Self::Reciprocal => "1/n",
            Self::AlternatingReciprocal => "(-1)^n/n",
            Self::Ratio => "n/(n+1)",
            Self::GeometricHalf => "1/2^n",
            Self::AlternatingSign => "(-1)^n",
            Self::Natural => "n",
            Self::Euler => "(1+1/n)^n",
            Self::Sqrt2Truncations => "floor(sqrt(2)*10^n)/10^n",
        }
    }

    /// Human-readable one-liner
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Reciprocal => "1/n: decreasing to 0, sup attained at the first index",
            Self::AlternatingReciprocal => "(-1)^n/n: oscillates around 0, both extremes attained",
            Self::Ratio => "n/(n+1): increasing to 1, sup not attained",
            Self::GeometricHalf => "1/2^n: decreasing to 0, sup attained at the first index",
            Self::AlternatingSign => "(-1)^n: oscillates between -1 and 1, no limit",
            Self::Natural => "n: unbounded above",
            Self::Euler => "(1+1/n)^n: increasing to e, sup not attained",
            Self::Sqrt2Truncations => "decimal truncations of √2: sup √2 not attained",
        }
    }

    /// Closed-form behaviour of the tail `a_s, a_{s+1}, …`
    pub fn analytic(&self, start: u64) -> AnalyticProfile {
        let s = start.max(1);
        let sf = s as f64;

        match self {
            Self::Reciprocal => AnalyticProfile {
                sup: AnalyticSide::attained(1.0 / sf),
                inf: AnalyticSide::approached(0.0),
                limit: Some(0.0),
            },
            Self::AlternatingReciprocal => {
                // Positive terms sit on even indices, negative on odd ones
                let first_even = if s % 2 == 0 { s } else { s + 1 };
                let first_odd = if s % 2 == 1 { s } else { s + 1 };
                AnalyticProfile {
                    sup: AnalyticSide::attained(1.0 / first_even as f64),
                    inf: AnalyticSide::attained(-1.0 / first_odd as f64),
                    limit: Some(0.0),
                }
            }
            Self::Ratio => AnalyticProfile {
                sup: AnalyticSide::approached(1.0),
                inf: AnalyticSide::attained(sf / (sf + 1.0)),
                limit: Some(1.0),
            },
            Self::GeometricHalf => AnalyticProfile {
                sup: AnalyticSide::attained(0.5f64.powf(sf)),
                inf: AnalyticSide::approached(0.0),
                limit: Some(0.0),
            },
            Self::AlternatingSign => AnalyticProfile {
                sup: AnalyticSide::attained(1.0),
                inf: AnalyticSide::attained(-1.0),
                limit: None,
            },
            Self::Natural => AnalyticProfile {
                sup: AnalyticSide::Unbounded,
                inf: AnalyticSide::attained(sf),
                limit: None,
            },
            Self::Euler => AnalyticProfile {
                sup: AnalyticSide::approached(E),
                inf: AnalyticSide::attained((1.0 + 1.0 / sf).powf(sf)),
                limit: Some(E),
            },
            Self::Sqrt2Truncations => {
                let scale = 10f64.powf(sf);
                let first = (SQRT_2 * scale).floor() / scale;
                AnalyticProfile {
                    sup: AnalyticSide::approached(SQRT_2),
                    inf: AnalyticSide::attained(first.min(SQRT_2)),
                    limit: Some(SQRT_2),
                }
            }
        }
    }
}
