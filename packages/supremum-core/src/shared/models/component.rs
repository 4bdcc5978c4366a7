//! Set components
//!
//! A set is an ordered union of components. Every component kind is one
//! variant of [`SetComponent`]; consumers match exhaustively, so a new kind
//! cannot be silently ignored.
//!
//! JSON shape (internally tagged on `type`):
//!
//! ```text
//! {"type": "interval", "start": "-inf", "end": 1.0, "left_open": true, "right_open": false}
//! {"type": "finite", "points": [[0.0], [2.5]]}
//! {"type": "sequence", "source": {"preset": "reciprocal"}, "index_range": {"start": 1, "end": 100}}
//! {"type": "curve_surface", "kind": "explicit", "formulas": ["x^2"], "domain": [{"min": -1, "max": 1}], "sample_count": 200}
//! ```

use super::extended::extended_f64;
use super::point::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One component of the analysed union
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SetComponent {
    /// Interval on the real line; endpoints may be ±∞ (then open)
    Interval {
        #[serde(with = "extended_f64")]
        start: f64,
        #[serde(with = "extended_f64")]
        end: f64,
        #[serde(default, alias = "leftOpen")]
        left_open: bool,
        #[serde(default, alias = "rightOpen")]
        right_open: bool,
    },

    /// Explicit list of points
    Finite { points: Vec<Point> },

    /// Formula-defined sequence over consecutive integer indices
    Sequence(SequenceSpec),

    /// Sampled curve, surface or level set
    #[serde(alias = "curve")]
    CurveSurface(CurveSurfaceSpec),
}

impl SetComponent {
    /// Closed interval `[start, end]`
    pub fn closed(start: f64, end: f64) -> Self {
        Self::interval(start, end, false, false)
    }

    /// Open interval `(start, end)`
    pub fn open(start: f64, end: f64) -> Self {
        Self::interval(start, end, true, true)
    }

    pub fn interval(start: f64, end: f64, left_open: bool, right_open: bool) -> Self {
        Self::Interval {
            start,
            end,
            left_open,
            right_open,
        }
    }

    /// Finite set of one-dimensional points
    pub fn scalars(values: &[f64]) -> Self {
        Self::Finite {
            points: values.iter().map(|v| Point::scalar(*v)).collect(),
        }
    }

    pub fn preset(preset: SequencePreset) -> Self {
        Self::Sequence(SequenceSpec {
            source: SequenceSource::Preset(preset),
            index_range: IndexRange::default(),
        })
    }

    pub fn custom_sequence(formula: impl Into<String>) -> Self {
        Self::Sequence(SequenceSpec {
            source: SequenceSource::Custom(formula.into()),
            index_range: IndexRange::default(),
        })
    }

    /// Kind name, as used in the `type` tag
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Interval { .. } => "interval",
            Self::Finite { .. } => "finite",
            Self::Sequence(_) => "sequence",
            Self::CurveSurface(_) => "curve_surface",
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Sequences
// ═══════════════════════════════════════════════════════════════════════════

/// Sequence component: a source formula plus the indices to generate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceSpec {
    pub source: SequenceSource,

    #[serde(default, alias = "indexRange")]
    pub index_range: IndexRange,
}

/// Where the terms come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceSource {
    /// Catalogue entry with known analytic behaviour
    #[serde(alias = "formulaId")]
    Preset(SequencePreset),

    /// User formula in the index variable `n`
    #[serde(alias = "customFormula")]
    Custom(String),
}

/// Catalogue of sequences whose sup/inf/limit are known in closed form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequencePreset {
    /// 1/n
    Reciprocal,
    /// (-1)^n / n
    AlternatingReciprocal,
    /// n / (n + 1)
    Ratio,
    /// 1 / 2^n
    GeometricHalf,
    /// (-1)^n
    AlternatingSign,
    /// n
    Natural,
    /// (1 + 1/n)^n
    Euler,
    /// floor(√2 · 10^n) / 10^n
    Sqrt2Truncations,
}

impl SequencePreset {
    pub fn all() -> [SequencePreset; 8] {
        [
            Self::Reciprocal,
            Self::AlternatingReciprocal,
            Self::Ratio,
            Self::GeometricHalf,
            Self::AlternatingSign,
            Self::Natural,
            Self::Euler,
            Self::Sqrt2Truncations,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reciprocal => "reciprocal",
            Self::AlternatingReciprocal => "alternating_reciprocal",
            Self::Ratio => "ratio",
            Self::GeometricHalf => "geometric_half",
            Self::AlternatingSign => "alternating_sign",
            Self::Natural => "natural",
            Self::Euler => "euler",
            Self::Sqrt2Truncations => "sqrt2_truncations",
        }
    }

    /// Parse preset from its identifier
    pub fn from_str(s: &str) -> Result<Self, String> {
        Self::all()
            .into_iter()
            .find(|p| p.as_str() == s.to_ascii_lowercase())
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::all().iter().map(|p| p.as_str()).collect();
                format!("Unknown sequence preset '{}'. Valid presets: {}", s, valid.join(", "))
            })
    }
}

impl fmt::Display for SequencePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inclusive index range `start..=end` (indices start at 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRange {
    pub start: u64,
    pub end: u64,
}

impl IndexRange {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Number of indices in the range (0 when `end < start`)
    pub fn len(&self) -> u64 {
        if self.end < self.start {
            0
        } else {
            self.end - self.start + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for IndexRange {
    fn default() -> Self {
        Self { start: 1, end: 100 }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Curves / surfaces
// ═══════════════════════════════════════════════════════════════════════════

/// How the formulas of a curve/surface are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    /// Graph of a function: y = f(x) or z = f(x, y)
    Explicit,
    /// One formula per output coordinate in `t` (or `u`, `v`)
    Parametric,
    /// Level set F(x, y[, z]) = 0
    Implicit,
}

impl CurveKind {
    /// Input variable names for a domain of the given dimension
    pub fn variables(&self, domain_dim: usize) -> &'static [&'static str] {
        match (self, domain_dim) {
            (Self::Parametric, 1) => &["t"],
            (Self::Parametric, _) => &["u", "v"],
            (_, 1) => &["x"],
            (_, 2) => &["x", "y"],
            _ => &["x", "y", "z"],
        }
    }
}

/// Closed range of one input variable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Curve/surface component sampled over an evenly spaced grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSurfaceSpec {
    pub kind: CurveKind,

    /// Explicit/implicit: one formula; parametric: one per output coordinate (≤ 3)
    pub formulas: Vec<String>,

    /// One range per input variable
    pub domain: Vec<AxisRange>,

    #[serde(default = "default_sample_count", alias = "sampleCount")]
    pub sample_count: usize,

    /// Coordinate used for sup/inf; defaults depend on `kind`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<usize>,
}

fn default_sample_count() -> usize {
    200
}

impl CurveSurfaceSpec {
    pub fn explicit(formula: impl Into<String>, min: f64, max: f64, sample_count: usize) -> Self {
        Self {
            kind: CurveKind::Explicit,
            formulas: vec![formula.into()],
            domain: vec![AxisRange::new(min, max)],
            sample_count,
            axis: None,
        }
    }

    /// Axis used for bounds when none is configured
    pub fn bound_axis(&self) -> usize {
        match (self.axis, self.kind) {
            (Some(axis), _) => axis,
            (None, CurveKind::Explicit) => self.domain.len(),
            (None, CurveKind::Parametric | CurveKind::Implicit) => 0,
        }
    }
}
