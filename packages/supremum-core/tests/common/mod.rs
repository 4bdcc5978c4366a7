//! Shared helpers for integration tests

#![allow(dead_code)]

use supremum_core::{
    AnalysisOptions, AnalysisResult, CurveKind, CurveSurfaceSpec, ExtendedReal, Point, SetComponent,
};
use supremum_core::shared::models::AxisRange;

pub const EPS: f64 = 1e-9;

pub fn run(components: &[SetComponent]) -> AnalysisResult {
    supremum_core::analyze(components, &AnalysisOptions::default())
}

pub fn run_with(components: &[SetComponent], options: AnalysisOptions) -> AnalysisResult {
    supremum_core::analyze(components, &options)
}

pub fn finite(value: f64) -> Option<ExtendedReal> {
    Some(ExtendedReal::Finite(value))
}

pub fn approx(actual: Option<f64>, expected: f64) -> bool {
    actual.map_or(false, |a| (a - expected).abs() < 1e-6)
}

pub fn points_2d(coords: &[(f64, f64)]) -> SetComponent {
    SetComponent::Finite {
        points: coords.iter().map(|(x, y)| Point::new(vec![*x, *y])).collect(),
    }
}

pub fn circle(samples: usize) -> SetComponent {
    SetComponent::CurveSurface(CurveSurfaceSpec {
        kind: CurveKind::Parametric,
        formulas: vec!["cos(t)".to_string(), "sin(t)".to_string()],
        domain: vec![AxisRange::new(0.0, 2.0 * std::f64::consts::PI)],
        sample_count: samples,
        axis: None,
    })
}

/// Deterministic pseudo-random points in the unit square (LCG)
pub fn scattered_points(n: usize, seed: u64) -> Vec<Point> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    };
    (0..n).map(|_| Point::new(vec![next(), next()])).collect()
}
