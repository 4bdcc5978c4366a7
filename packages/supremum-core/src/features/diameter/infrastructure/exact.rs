//! All-pairs diameter, O(n²)

use crate::features::diameter::domain::Pair;
use crate::shared::models::{DistanceFn, Point};

/// Farthest pair among `indices` (indices into `points`)
pub fn farthest_pair_among(points: &[Point], indices: &[usize], distance: DistanceFn) -> Pair {
    let mut best = Pair::new(0.0, indices.first().copied().unwrap_or(0), indices.first().copied().unwrap_or(0));
    for (i, &a) in indices.iter().enumerate() {
        for &b in &indices[i + 1..] {
            let d = distance(&points[a], &points[b]);
            if d > best.distance {
                best = Pair::new(d, a, b);
            }
        }
    }
    best
}

/// Exact diameter of `points`
pub fn exact_diameter(points: &[Point], distance: DistanceFn) -> Pair {
    let indices: Vec<usize> = (0..points.len()).collect();
    farthest_pair_among(points, &indices, distance)
}
