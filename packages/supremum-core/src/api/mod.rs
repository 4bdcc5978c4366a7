//! API boundary
//!
//! JSON in, JSON out. Decoding and validation happen here; the core only
//! ever sees well-formed components.

mod request;
mod validation;

pub use request::AnalysisRequest;
pub use validation::{validate_request, ValidationError};

use crate::errors::Result;
use crate::pipeline::AnalysisEngine;
use tracing::debug;

/// Decode, validate and analyse a JSON request with `engine`
pub fn analyze_request_json(engine: &AnalysisEngine, input: &str) -> Result<String> {
    let request = AnalysisRequest::from_json(input)?;
    validate_request(&request, engine.config())?;
    debug!("Request accepted: {} components", request.components.len());

    let result = engine.analyze(&request.components, &request.options);
    Ok(result.to_json()?)
}

/// [`analyze_request_json`] with the default configuration
pub fn analyze_json(input: &str) -> Result<String> {
    analyze_request_json(&AnalysisEngine::default(), input)
}
