//! Points in ℝⁿ and the metric used by the diameter engine

use serde::{Deserialize, Serialize};

/// Ordered tuple of reals
///
/// Serialized as a plain JSON array. Coordinates past `dim()` read as zero,
/// so points of different dimensionality can be compared without error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point(pub Vec<f64>);

impl Point {
    pub fn new(coords: Vec<f64>) -> Self {
        Self(coords)
    }

    /// One-dimensional point
    pub fn scalar(value: f64) -> Self {
        Self(vec![value])
    }

    pub fn dim(&self) -> usize {
        self.0.len()
    }

    pub fn coords(&self) -> &[f64] {
        &self.0
    }

    /// Coordinate on `axis`, zero when the point has fewer dimensions
    pub fn coord(&self, axis: usize) -> f64 {
        self.0.get(axis).copied().unwrap_or(0.0)
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }
}

impl From<f64> for Point {
    fn from(value: f64) -> Self {
        Self::scalar(value)
    }
}

impl From<Vec<f64>> for Point {
    fn from(coords: Vec<f64>) -> Self {
        Self(coords)
    }
}

/// Distance function injected into the diameter algorithms
pub type DistanceFn = fn(&Point, &Point) -> f64;

/// Euclidean distance on zero-padded coordinate vectors
pub fn euclidean(a: &Point, b: &Point) -> f64 {
    let dim = a.dim().max(b.dim());
    (0..dim)
        .map(|i| {
            let d = a.coord(i) - b.coord(i);
            d * d
        })
        .sum::<f64>()
        .sqrt()
}
