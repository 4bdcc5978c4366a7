//! Diameter infrastructure

mod ascent;
mod engine;
mod exact;
mod sampled;

pub use ascent::multi_start_ascent;
pub use engine::DiameterEngine;
pub use exact::{exact_diameter, farthest_pair_among};
pub use sampled::sampled_refine;
