//! Sampled-refine diameter for large discrete clouds
//!
//! Exact scan on an evenly strided sample, then one O(n) pass over every
//! point that swaps in whichever witness strictly lengthens the pair.
//! The result never exceeds the exact diameter.

use super::exact::farthest_pair_among;
use crate::features::diameter::domain::Pair;
use crate::shared::models::{DistanceFn, Point};

pub fn sampled_refine(points: &[Point], sample_size: usize, distance: DistanceFn) -> Pair {
    let n = points.len();
    if n == 0 {
        return Pair::origin();
    }

    let m = sample_size.clamp(1, n);
    let sample: Vec<usize> = (0..m).map(|i| i * n / m).collect();
    let mut best = farthest_pair_among(points, &sample, distance);

    for r in 0..n {
        let with_q = distance(&points[r], &points[best.b]);
        let with_p = distance(&points[best.a], &points[r]);
        if with_q > best.distance && with_q >= with_p {
            best = Pair::new(with_q, r, best.b);
        } else if with_p > best.distance {
            best = Pair::new(with_p, best.a, r);
        }
    }

    best
}
