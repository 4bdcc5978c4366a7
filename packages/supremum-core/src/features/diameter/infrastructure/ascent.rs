//! Multi-start alternating ascent for sampled manifolds
//!
//! Each start holds one endpoint fixed and scans (strided) for the farthest
//! partner, then swaps roles, until neither endpoint moves or the iteration
//! cap is hit. Starts are evenly spaced index pairs roughly half the cloud
//! apart. Deterministic: no randomness anywhere.

use crate::config::DiameterConfig;
use crate::features::diameter::domain::Pair;
use crate::shared::models::{DistanceFn, Point};

pub fn multi_start_ascent(points: &[Point], config: &DiameterConfig, distance: DistanceFn) -> Pair {
    let n = points.len();
    if n < 2 {
        return Pair::origin();
    }

    let starts = config.ascent_max_starts.min(n / 10).max(1);
    let stride = n.div_ceil(config.ascent_scan_budget.max(1)).max(1);

    let mut best = Pair::origin();
    for i in 0..starts {
        let a = i * n / starts;
        let b = (a + n / 2) % n;
        let local = ascend(points, a, b, config.ascent_max_iterations, stride, distance);
        if local.distance > best.distance {
            best = local;
        }
    }
    best
}

fn ascend(
    points: &[Point],
    mut a: usize,
    mut b: usize,
    max_iterations: usize,
    stride: usize,
    distance: DistanceFn,
) -> Pair {
    let mut current = distance(&points[a], &points[b]);

    for _ in 0..max_iterations {
        let mut improved = false;

        let (candidate, d) = farthest_from(points, a, stride, distance);
        if d > current {
            b = candidate;
            current = d;
            improved = true;
        }

        let (candidate, d) = farthest_from(points, b, stride, distance);
        if d > current {
            a = candidate;
            current = d;
            improved = true;
        }

        if !improved {
            break;
        }
    }

    Pair::new(current, a, b)
}

/// Farthest point from `anchor` over every `stride`-th index
fn farthest_from(points: &[Point], anchor: usize, stride: usize, distance: DistanceFn) -> (usize, f64) {
    let mut best = (anchor, 0.0);
    for j in (0..points.len()).step_by(stride) {
        let d = distance(&points[anchor], &points[j]);
        if d > best.1 {
            best = (j, d);
        }
    }
    best
}
