//! Analysis result record
//!
//! Produced fresh by every analysis call and never mutated afterwards.
//! `None` always means "does not exist / not attained", never zero.

use super::extended::ExtendedReal;
use super::options::Universe;
use super::point::Point;
use serde::Serialize;
use std::fmt;

/// Which algorithm produced the diameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiameterMethod {
    /// Zero or one point
    Trivial,
    /// All-pairs scan
    Exact,
    /// Strided sample + one refinement pass
    SampledRefine,
    /// Multi-start alternating ascent over a sampled manifold
    MultiStartAscent,
    /// Some component is unbounded; nothing was computed
    Unbounded,
}

impl DiameterMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trivial => "trivial",
            Self::Exact => "exact",
            Self::SampledRefine => "sampled_refine",
            Self::MultiStartAscent => "multi_start_ascent",
            Self::Unbounded => "unbounded",
        }
    }

    /// Whether the reported value is exact rather than an approximation
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Trivial | Self::Exact | Self::Unbounded)
    }
}

impl fmt::Display for DiameterMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Component dropped from the aggregate, with a stable reason code
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExcludedComponent {
    pub index: usize,
    pub reason: &'static str,
    pub detail: String,
}

/// Per-sequence convergence findings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceReport {
    /// Position of the sequence in the component list
    pub index: usize,
    /// Number of generated (finite) terms
    pub terms: usize,
    pub is_cauchy: bool,
    /// Analytic limit for presets, last generated term otherwise
    pub apparent_limit: Option<f64>,
    /// Whether some interval/finite component contains the apparent limit
    pub limit_in_set: Option<bool>,
}

/// Immutable outcome of one analysis call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub universe: Universe,
    pub is_empty: bool,

    pub sup: Option<ExtendedReal>,
    pub inf: Option<ExtendedReal>,
    pub max: Option<f64>,
    pub min: Option<f64>,
    pub bounded_above: bool,
    pub bounded_below: bool,

    pub diameter: Option<ExtendedReal>,
    pub diameter_witness: Option<(Point, Point)>,
    pub diameter_method: Option<DiameterMethod>,

    pub is_cauchy: Option<bool>,
    pub converges_to: Option<f64>,
    pub is_complete_in_space: bool,
    pub is_compact: bool,

    pub completeness_gap: bool,
    pub theoretical_sup: Option<f64>,
    pub theoretical_inf: Option<f64>,

    pub sequences: Vec<SequenceReport>,
    pub excluded: Vec<ExcludedComponent>,
}

impl AnalysisResult {
    /// Result for the empty set: vacuously bounded, compact and complete
    pub fn empty(universe: Universe) -> Self {
        Self {
            universe,
            is_empty: true,
            sup: None,
            inf: None,
            max: None,
            min: None,
            bounded_above: true,
            bounded_below: true,
            diameter: None,
            diameter_witness: None,
            diameter_method: None,
            is_cauchy: None,
            converges_to: None,
            is_complete_in_space: true,
            is_compact: true,
            completeness_gap: false,
            theoretical_sup: None,
            theoretical_inf: None,
            sequences: Vec::new(),
            excluded: Vec::new(),
        }
    }

    /// Finite supremum, if it exists
    pub fn sup_value(&self) -> Option<f64> {
        self.sup.and_then(ExtendedReal::finite)
    }

    /// Finite infimum, if it exists
    pub fn inf_value(&self) -> Option<f64> {
        self.inf.and_then(ExtendedReal::finite)
    }

    /// Finite diameter, if it exists
    pub fn diameter_value(&self) -> Option<f64> {
        self.diameter.and_then(ExtendedReal::finite)
    }

    /// The epsilon-band `(sup − ε, sup]` illustrating the approximation property
    pub fn epsilon_band(&self, epsilon: f64) -> Option<(f64, f64)> {
        let sup = self.sup_value()?;
        (epsilon > 0.0).then_some((sup - epsilon, sup))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_shape() {
        let result = AnalysisResult::empty(Universe::Real);
        assert!(result.is_empty);
        assert!(result.bounded_above && result.bounded_below);
        assert!(result.sup.is_none() && result.inf.is_none());
        assert!(result.max.is_none() && result.min.is_none());
        assert!(result.diameter.is_none());
    }

    #[test]
    fn test_null_max_serializes_as_null() {
        let mut result = AnalysisResult::empty(Universe::Real);
        result.sup = Some(ExtendedReal::Finite(1.0));
        let json = result.to_json().unwrap();
        assert!(json.contains("\"max\":null"));
        assert!(json.contains("\"sup\":1.0"));
    }

    #[test]
    fn test_epsilon_band() {
        let mut result = AnalysisResult::empty(Universe::Real);
        assert_eq!(result.epsilon_band(0.1), None);

        result.sup = Some(ExtendedReal::Finite(2.0));
        assert_eq!(result.epsilon_band(0.5), Some((1.5, 2.0)));
        assert_eq!(result.epsilon_band(0.0), None);

        result.sup = Some(ExtendedReal::PosInfinity);
        assert_eq!(result.epsilon_band(0.5), None);
    }

    #[test]
    fn test_diameter_method_exactness() {
        assert!(DiameterMethod::Exact.is_exact());
        assert!(!DiameterMethod::SampledRefine.is_exact());
        assert!(!DiameterMethod::MultiStartAscent.is_exact());
        assert_eq!(DiameterMethod::MultiStartAscent.to_string(), "multi_start_ascent");
    }
}
