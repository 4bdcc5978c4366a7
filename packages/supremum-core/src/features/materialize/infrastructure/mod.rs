//! Materialize infrastructure

mod curve_surface;
mod materializer;
mod sequence;

pub use curve_surface::CurveSampler;
pub use materializer::Materializer;
pub use sequence::SequenceSampler;
