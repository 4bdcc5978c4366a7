//! Configuration I/O (YAML schema)
//!
//! Defines YAML schema types. Loading/saving lives on `EngineConfig`.

use super::patch::{DiameterConfigPatch, HeuristicConfigPatch, SamplingConfigPatch};
use serde::{Deserialize, Serialize};

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    pub version: u32,

    /// Base preset
    pub preset: String,

    /// Fine-grained overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<ConfigOverrides>,
}

/// Configuration overrides, merged field by field onto the preset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampling: Option<SamplingConfigPatch>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diameter: Option<DiameterConfigPatch>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub heuristics: Option<HeuristicConfigPatch>,
}
