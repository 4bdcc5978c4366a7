//! Bounds infrastructure

mod component_bounds;
mod divergence;
mod union;

pub use component_bounds::BoundsCalculator;
pub use divergence::{diverges, Direction};
pub use union::fold_union;
