//! Feature modules, in pipeline order

pub mod formula;
pub mod materialize;
pub mod bounds;
pub mod diameter;
pub mod completeness;
