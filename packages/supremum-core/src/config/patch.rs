//! Partial section overrides
//!
//! Patch types with all-optional fields. YAML overrides deserialize into
//! these and are merged onto the named preset, so a field left out of the
//! file keeps the preset's value.

use super::engine_config::EngineConfig;
use super::section_configs::{DiameterConfig, HeuristicConfig, SamplingConfig};
use serde::{Deserialize, Serialize};

/// Patch type for SamplingConfig (all fields optional)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplingConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_sequence_terms: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_curve_samples: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_grid_resolution: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_formula_len: Option<usize>,
}

impl SamplingConfigPatch {
    pub fn apply(self, mut base: SamplingConfig) -> SamplingConfig {
        if let Some(v) = self.max_sequence_terms {
            base.max_sequence_terms = v;
        }
        if let Some(v) = self.max_curve_samples {
            base.max_curve_samples = v;
        }
        if let Some(v) = self.max_grid_resolution {
            base.max_grid_resolution = v;
        }
        if let Some(v) = self.implicit_threshold {
            base.implicit_threshold = v;
        }
        if let Some(v) = self.max_formula_len {
            base.max_formula_len = v;
        }
        base
    }
}

impl From<SamplingConfig> for SamplingConfigPatch {
    fn from(c: SamplingConfig) -> Self {
        Self {
            max_sequence_terms: Some(c.max_sequence_terms),
            max_curve_samples: Some(c.max_curve_samples),
            max_grid_resolution: Some(c.max_grid_resolution),
            implicit_threshold: Some(c.implicit_threshold),
            max_formula_len: Some(c.max_formula_len),
        }
    }
}

/// Patch type for DiameterConfig
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiameterConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_threshold: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refine_sample_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ascent_max_starts: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ascent_max_iterations: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ascent_scan_budget: Option<usize>,
}

impl DiameterConfigPatch {
    pub fn apply(self, mut base: DiameterConfig) -> DiameterConfig {
        if let Some(v) = self.exact_threshold {
            base.exact_threshold = v;
        }
        if let Some(v) = self.refine_sample_size {
            base.refine_sample_size = v;
        }
        if let Some(v) = self.ascent_max_starts {
            base.ascent_max_starts = v;
        }
        if let Some(v) = self.ascent_max_iterations {
            base.ascent_max_iterations = v;
        }
        if let Some(v) = self.ascent_scan_budget {
            base.ascent_scan_budget = v;
        }
        base
    }
}

impl From<DiameterConfig> for DiameterConfigPatch {
    fn from(c: DiameterConfig) -> Self {
        Self {
            exact_threshold: Some(c.exact_threshold),
            refine_sample_size: Some(c.refine_sample_size),
            ascent_max_starts: Some(c.ascent_max_starts),
            ascent_max_iterations: Some(c.ascent_max_iterations),
            ascent_scan_budget: Some(c.ascent_scan_budget),
        }
    }
}

/// Patch type for HeuristicConfig
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeuristicConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_window: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tail_indices: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divergence_magnitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divergence_increment: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cauchy_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cauchy_min_terms: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership_tolerance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attainment_epsilon: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub irrational_tolerance: Option<f64>,
}

impl HeuristicConfigPatch {
    pub fn apply(self, mut base: HeuristicConfig) -> HeuristicConfig {
        if let Some(v) = self.local_window {
            base.local_window = v;
        }
        if let Some(v) = self.tail_indices {
            base.tail_indices = v;
        }
        if let Some(v) = self.divergence_magnitude {
            base.divergence_magnitude = v;
        }
        if let Some(v) = self.divergence_increment {
            base.divergence_increment = v;
        }
        if let Some(v) = self.cauchy_threshold {
            base.cauchy_threshold = v;
        }
        if let Some(v) = self.cauchy_min_terms {
            base.cauchy_min_terms = v;
        }
        if let Some(v) = self.membership_tolerance {
            base.membership_tolerance = v;
        }
        if let Some(v) = self.attainment_epsilon {
            base.attainment_epsilon = v;
        }
        if let Some(v) = self.irrational_tolerance {
            base.irrational_tolerance = v;
        }
        base
    }
}

impl From<HeuristicConfig> for HeuristicConfigPatch {
    fn from(c: HeuristicConfig) -> Self {
        Self {
            local_window: Some(c.local_window),
            tail_indices: Some(c.tail_indices),
            divergence_magnitude: Some(c.divergence_magnitude),
            divergence_increment: Some(c.divergence_increment),
            cauchy_threshold: Some(c.cauchy_threshold),
            cauchy_min_terms: Some(c.cauchy_min_terms),
            membership_tolerance: Some(c.membership_tolerance),
            attainment_epsilon: Some(c.attainment_epsilon),
            irrational_tolerance: Some(c.irrational_tolerance),
        }
    }
}

impl EngineConfig {
    /// Apply sampling patch (data alternative to the closure override)
    pub fn sampling_patch(self, patch: SamplingConfigPatch) -> Self {
        self.sampling(|base| patch.apply(base))
    }

    /// Apply diameter patch
    pub fn diameter_patch(self, patch: DiameterConfigPatch) -> Self {
        self.diameter(|base| patch.apply(base))
    }

    /// Apply heuristics patch
    pub fn heuristics_patch(self, patch: HeuristicConfigPatch) -> Self {
        self.heuristics(|base| patch.apply(base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;

    #[test]
    fn test_patch_keeps_preset_values() {
        let config = EngineConfig::preset(Preset::Fast)
            .diameter_patch(DiameterConfigPatch {
                exact_threshold: Some(64),
                ..Default::default()
            })
            .build()
            .unwrap();
        let fast = DiameterConfig::from_preset(Preset::Fast);
        assert_eq!(config.diameter().exact_threshold, 64);
        assert_eq!(config.diameter().refine_sample_size, fast.refine_sample_size);
        assert_eq!(config.diameter().ascent_max_starts, fast.ascent_max_starts);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let base = HeuristicConfig::from_preset(Preset::Thorough);
        assert_eq!(HeuristicConfigPatch::default().apply(base.clone()), base);
    }

    #[test]
    fn test_full_patch_roundtrip() {
        let sampling = SamplingConfig::from_preset(Preset::Thorough);
        let patch = SamplingConfigPatch::from(sampling.clone());
        assert_eq!(patch.apply(SamplingConfig::from_preset(Preset::Fast)), sampling);
    }

    #[test]
    fn test_patch_composes_with_closure_override() {
        let config = EngineConfig::preset(Preset::Balanced)
            .sampling(|c| c.max_curve_samples(300))
            .sampling_patch(SamplingConfigPatch {
                max_sequence_terms: Some(80),
                ..Default::default()
            })
            .build()
            .unwrap();
        assert_eq!(config.sampling().max_curve_samples, 300);
        assert_eq!(config.sampling().max_sequence_terms, 80);
    }
}
