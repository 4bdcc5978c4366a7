//! Analysis pipeline
//!
//! ```text
//! components ─▶ L1 materialize ─▶ L2 bounds ─▶ L3 diameter ─▶ L4 completeness ─▶ AnalysisResult
//! ```

mod orchestrator;

pub use orchestrator::{analyze, AnalysisEngine};
