//! Bounds domain models

use crate::features::materialize::AnalyticSide;
use crate::shared::models::ExtendedReal;

/// One side of a component's bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Side {
    Unbounded,
    /// Finite extreme; `attained` when some member equals it
    Bound { value: f64, attained: bool },
}

impl Side {
    pub fn attained(value: f64) -> Self {
        Self::Bound {
            value,
            attained: true,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Unbounded => None,
            Self::Bound { value, .. } => Some(*value),
        }
    }
}

impl From<AnalyticSide> for Side {
    fn from(side: AnalyticSide) -> Self {
        match side {
            AnalyticSide::Unbounded => Self::Unbounded,
            AnalyticSide::Value { value, attained } => Self::Bound { value, attained },
        }
    }
}

/// Upper and lower bounds of a single component on its bound axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentBounds {
    pub index: usize,
    pub upper: Side,
    pub lower: Side,
}

/// Bounds of the whole union
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnionBounds {
    pub is_empty: bool,
    pub sup: Option<ExtendedReal>,
    pub inf: Option<ExtendedReal>,
    pub max: Option<f64>,
    pub min: Option<f64>,
    pub bounded_above: bool,
    pub bounded_below: bool,
}

impl UnionBounds {
    pub fn empty() -> Self {
        Self {
            is_empty: true,
            sup: None,
            inf: None,
            max: None,
            min: None,
            bounded_above: true,
            bounded_below: true,
        }
    }
}
