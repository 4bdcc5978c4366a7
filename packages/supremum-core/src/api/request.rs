//! JSON request envelope

use crate::shared::models::{AnalysisOptions, SetComponent};
use serde::{Deserialize, Serialize};

/// Ordered components plus per-call options
///
/// ```json
/// {
///   "components": [{"type": "interval", "start": 0, "end": 1}],
///   "options": {"universe": "R"}
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub components: Vec<SetComponent>,

    #[serde(default)]
    pub options: AnalysisOptions,
}

impl AnalysisRequest {
    pub fn new(components: Vec<SetComponent>) -> Self {
        Self {
            components,
            options: AnalysisOptions::default(),
        }
    }

    pub fn from_json(input: &str) -> serde_json::Result<Self> {
        serde_json::from_str(input)
    }
}
