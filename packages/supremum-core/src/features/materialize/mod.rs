//! Materialize Feature
//!
//! Turns declarative components into concrete, domain-clipped data:
//!
//! | component     | materialized as                                      |
//! |---------------|------------------------------------------------------|
//! | interval      | [`IntervalExtent`] intersected with the domain       |
//! | finite        | finite points inside the domain                      |
//! | sequence      | generated terms (+ analytic profile or tail samples) |
//! | curve_surface | grid samples inside the domain                       |

pub mod domain;
pub mod infrastructure;

pub use domain::{
    AnalyticProfile, AnalyticSide, IntervalExtent, Materialization, Materialized,
    MaterializeError, MaterializedComponent, PointOrigin, SequenceSamples,
};
pub use infrastructure::{CurveSampler, Materializer, SequenceSampler};
