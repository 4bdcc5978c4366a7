//! Diameter Feature
//!
//! Supremum of pairwise Euclidean distances over the materialized points.
//!
//! | points                    | algorithm            | result      |
//! |---------------------------|----------------------|-------------|
//! | any unbounded component   | none                 | +∞          |
//! | 0 / 1                     | trivial              | null / 0    |
//! | n < exact_threshold       | all pairs, O(n²)     | exact       |
//! | curve/surface present     | multi-start ascent   | lower bound |
//! | otherwise                 | sampled refine, O(n) | lower bound |
//!
//! The metric is injected as a [`DistanceFn`](crate::shared::models::DistanceFn).

pub mod domain;
pub mod infrastructure;

pub use domain::{DiameterResult, Pair, PointCloud};
pub use infrastructure::{
    exact_diameter, farthest_pair_among, multi_start_ascent, sampled_refine, DiameterEngine,
};
