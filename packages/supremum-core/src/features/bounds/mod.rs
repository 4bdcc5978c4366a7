//! Bounds Feature
//!
//! Supremum / infimum / max / min of the union on the bound axis.
//!
//! - intervals: endpoints, attained unless open
//! - finite sets, curves: extremes of the (domain-filtered) points
//! - catalogued sequences: closed-form profile
//! - custom sequences: sampled extremes plus tail divergence heuristic

pub mod domain;
pub mod infrastructure;

pub use domain::{ComponentBounds, Side, UnionBounds};
pub use infrastructure::{diverges, fold_union, BoundsCalculator, Direction};
