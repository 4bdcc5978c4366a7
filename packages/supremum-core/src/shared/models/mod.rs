//! Core data model
//!
//! - `Point`: ordered tuple of reals, zero-padded for mixed dimensions
//! - `SetComponent`: closed tagged union of component kinds
//! - `AnalysisOptions`: universe, bound axis, optional bounding domain
//! - `AnalysisResult`: immutable record produced per analysis call

pub mod component;
pub mod extended;
pub mod options;
pub mod point;
pub mod result;

pub use component::{
    AxisRange, CurveKind, CurveSurfaceSpec, IndexRange, SequencePreset, SequenceSource,
    SequenceSpec, SetComponent,
};
pub use extended::ExtendedReal;
pub use options::{AnalysisOptions, BoundingDomain, Universe};
pub use point::{euclidean, DistanceFn, Point};
pub use result::{AnalysisResult, DiameterMethod, ExcludedComponent, SequenceReport};
