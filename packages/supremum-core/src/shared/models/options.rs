//! Per-call analysis options

use super::extended::extended_f64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number system the set lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Universe {
    /// ℝ: every bounded non-empty set has a supremum
    #[default]
    #[serde(rename = "R")]
    Real,
    /// ℚ (pedagogical): irrational suprema do not exist
    #[serde(rename = "Q")]
    Rational,
}

impl Universe {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.trim() {
            "R" | "r" | "real" | "reals" => Ok(Self::Real),
            "Q" | "q" | "rational" | "rationals" => Ok(Self::Rational),
            _ => Err(format!("Unknown universe '{}'. Valid universes: R, Q", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Real => "R",
            Self::Rational => "Q",
        }
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Restriction of the ambient space on the bound axis; the analysis runs on S ∩ D
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingDomain {
    #[serde(with = "extended_f64")]
    pub min: f64,
    #[serde(with = "extended_f64")]
    pub max: f64,
    #[serde(default)]
    pub min_open: bool,
    #[serde(default)]
    pub max_open: bool,
}

impl BoundingDomain {
    pub fn closed(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_open: false,
            max_open: false,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        let above_min = if self.min_open {
            value > self.min
        } else {
            value >= self.min
        };
        let below_max = if self.max_open {
            value < self.max
        } else {
            value <= self.max
        };
        above_min && below_max
    }
}

/// Options record passed alongside the components
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    pub universe: Universe,

    /// Coordinate used for sup/inf of point-valued components
    pub axis: usize,

    #[serde(skip_serializing_if = "Option::is_none", alias = "boundingDomain")]
    pub bounding_domain: Option<BoundingDomain>,
}

impl AnalysisOptions {
    pub fn rational() -> Self {
        Self {
            universe: Universe::Rational,
            ..Self::default()
        }
    }

    pub fn with_domain(mut self, domain: BoundingDomain) -> Self {
        self.bounding_domain = Some(domain);
        self
    }
}
