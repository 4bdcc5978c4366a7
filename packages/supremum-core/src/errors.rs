//! Error types for supremum-core
//!
//! Provides unified error handling across the crate. The analysis core itself
//! never fails; these errors surface at the boundary (request decoding,
//! validation, configuration) and from the formula evaluator.

use crate::api::ValidationError;
use crate::config::ConfigError;
use crate::features::formula::EvalError;
use thiserror::Error;

/// Main error type for supremum-core operations
#[derive(Debug, Error)]
pub enum EngineError {
    /// Malformed request rejected before the core runs
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Formula could not be compiled or evaluated
    #[error("Formula error: {0}")]
    Formula(#[from] EvalError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON decoding/encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Short machine-readable category
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::Validation(_) => "validation",
            EngineError::Formula(_) => "formula",
            EngineError::Config(_) => "config",
            EngineError::Json(_) => "json",
            EngineError::Io(_) => "io",
        }
    }
}

/// Result type alias for supremum operations
pub type Result<T> = std::result::Result<T, EngineError>;
