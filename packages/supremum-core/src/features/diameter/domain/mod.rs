//! Diameter domain models

use crate::shared::models::{DiameterMethod, ExtendedReal, Point};

/// Best pair found so far, as indices into the point slice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pair {
    pub distance: f64,
    pub a: usize,
    pub b: usize,
}

impl Pair {
    pub fn new(distance: f64, a: usize, b: usize) -> Self {
        Self { distance, a, b }
    }

    /// Zero-length pair at index 0
    pub fn origin() -> Self {
        Self::new(0.0, 0, 0)
    }
}

/// Points handed to the diameter engine
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    pub points: Vec<Point>,
    /// Some component extends to infinity
    pub unbounded: bool,
    /// Points sampled from a continuous curve/surface are present
    pub continuous: bool,
}

/// Diameter value, witness pair and the algorithm that produced them
#[derive(Debug, Clone, PartialEq)]
pub struct DiameterResult {
    pub value: ExtendedReal,
    pub witness: Option<(Point, Point)>,
    pub method: DiameterMethod,
}

impl DiameterResult {
    pub fn unbounded() -> Self {
        Self {
            value: ExtendedReal::PosInfinity,
            witness: None,
            method: DiameterMethod::Unbounded,
        }
    }

    pub fn from_pair(points: &[Point], pair: Pair, method: DiameterMethod) -> Self {
        Self {
            value: ExtendedReal::Finite(pair.distance),
            witness: Some((points[pair.a].clone(), points[pair.b].clone())),
            method,
        }
    }
}
