//! Materialization domain models
//!
//! What the later stages see of a component: clipped interval extents,
//! concrete point sets, sequence samples with their analytic profile.

mod presets;

use crate::features::formula::EvalError;
use crate::shared::models::{BoundingDomain, ExcludedComponent, Point, SequencePreset};
use thiserror::Error;

/// Why a component could not be materialized
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MaterializeError {
    #[error(transparent)]
    Formula(#[from] EvalError),

    /// Formula count or domain dimension does not fit the curve kind
    #[error("invalid shape: {0}")]
    Shape(String),
}

impl MaterializeError {
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::Formula(err) => err.reason_code(),
            Self::Shape(_) => "invalid_shape",
        }
    }
}

/// One side (upper or lower) of a closed-form profile
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnalyticSide {
    Unbounded,
    Value { value: f64, attained: bool },
}

impl AnalyticSide {
    pub fn attained(value: f64) -> Self {
        Self::Value {
            value,
            attained: true,
        }
    }

    /// Extreme approached but never reached by a term
    pub fn approached(value: f64) -> Self {
        Self::Value {
            value,
            attained: false,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Unbounded => None,
            Self::Value { value, .. } => Some(*value),
        }
    }
}

/// Closed-form sup/inf/limit of a catalogued sequence tail
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticProfile {
    pub sup: AnalyticSide,
    pub inf: AnalyticSide,
    pub limit: Option<f64>,
}

impl AnalyticProfile {
    /// Whether `side` still describes `S ∩ D` on its own
    ///
    /// An attained extreme must be a member of `D`; an approached one only
    /// needs to lie in its closure.
    pub fn side_within(side: AnalyticSide, domain: &BoundingDomain) -> bool {
        match side {
            AnalyticSide::Unbounded => false,
            AnalyticSide::Value {
                value,
                attained: true,
            } => domain.contains(value),
            AnalyticSide::Value {
                value,
                attained: false,
            } => value >= domain.min && value <= domain.max,
        }
    }
}

/// Interval after intersection with the bounding domain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalExtent {
    pub start: f64,
    pub end: f64,
    pub left_open: bool,
    pub right_open: bool,
}

impl IntervalExtent {
    pub fn new(start: f64, end: f64, left_open: bool, right_open: bool) -> Self {
        // Infinite ends are always open
        Self {
            start,
            end,
            left_open: left_open || start.is_infinite(),
            right_open: right_open || end.is_infinite(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end || (self.start == self.end && (self.left_open || self.right_open))
    }

    pub fn contains(&self, value: f64, tolerance: f64) -> bool {
        let above = if self.left_open {
            value > self.start
        } else {
            value >= self.start - tolerance
        };
        let below = if self.right_open {
            value < self.end
        } else {
            value <= self.end + tolerance
        };
        above && below
    }

    /// Exact intersection with `domain`
    pub fn clip(&self, domain: &BoundingDomain) -> Self {
        let (start, left_open) = if self.start > domain.min {
            (self.start, self.left_open)
        } else if self.start < domain.min {
            (domain.min, domain.min_open)
        } else {
            (self.start, self.left_open || domain.min_open)
        };

        let (end, right_open) = if self.end < domain.max {
            (self.end, self.right_open)
        } else if self.end > domain.max {
            (domain.max, domain.max_open)
        } else {
            (self.end, self.right_open || domain.max_open)
        };

        Self::new(start, end, left_open, right_open)
    }
}

/// Where a point set came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointOrigin {
    Finite,
    CurveSurface,
}

/// Generated view of one sequence
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceSamples {
    pub preset: Option<SequencePreset>,
    /// Closed-form profile of the unclipped tail (presets only)
    pub analytic: Option<AnalyticProfile>,
    /// Finite generated terms, in index order
    pub terms: Vec<f64>,
    /// Custom only: the first `local_window` terms from the start index
    pub window: Vec<f64>,
    /// Custom only: far-tail samples in index order; overflow kept as ±∞
    pub tail: Vec<f64>,
}

impl SequenceSamples {
    /// Every finite sampled member: terms, window and finite tail values
    pub fn members(&self) -> impl Iterator<Item = f64> + '_ {
        self.terms
            .iter()
            .chain(self.window.iter())
            .chain(self.tail.iter())
            .copied()
            .filter(|v| v.is_finite())
    }

    /// Whether an analytic extreme still bounds the sequence restricted to `domain`
    ///
    /// Under a domain the extreme counts only when some generated term
    /// survived the filter; an empty restriction has no extremes at all.
    pub fn keeps_analytic(&self, side: AnalyticSide, domain: Option<&BoundingDomain>) -> bool {
        match domain {
            None => side.value().is_some(),
            Some(d) => !self.terms.is_empty() && AnalyticProfile::side_within(side, d),
        }
    }
}

/// Materialized body of a component
#[derive(Debug, Clone, PartialEq)]
pub enum Materialized {
    Interval(IntervalExtent),
    Points {
        origin: PointOrigin,
        points: Vec<Point>,
        /// Coordinate used for bounds
        axis: usize,
    },
    Sequence(SequenceSamples),
}

/// A component ready for analysis, tagged with its input position
#[derive(Debug, Clone, PartialEq)]
pub struct MaterializedComponent {
    pub index: usize,
    pub body: Materialized,
}

/// Output of the materialize stage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Materialization {
    pub components: Vec<MaterializedComponent>,
    pub excluded: Vec<ExcludedComponent>,
}

impl Materialization {
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn exclude(&mut self, index: usize, reason: &'static str, detail: impl Into<String>) {
        self.excluded.push(ExcludedComponent {
            index,
            reason,
            detail: detail.into(),
        });
    }

    pub fn intervals(&self) -> impl Iterator<Item = &IntervalExtent> {
        self.components.iter().filter_map(|c| match &c.body {
            Materialized::Interval(extent) => Some(extent),
            _ => None,
        })
    }

    pub fn sequences(&self) -> impl Iterator<Item = (usize, &SequenceSamples)> {
        self.components.iter().filter_map(|c| match &c.body {
            Materialized::Sequence(samples) => Some((c.index, samples)),
            _ => None,
        })
    }

    pub fn has_curve_surface(&self) -> bool {
        self.components.iter().any(|c| {
            matches!(
                c.body,
                Materialized::Points {
                    origin: PointOrigin::CurveSurface,
                    ..
                }
            )
        })
    }
}
