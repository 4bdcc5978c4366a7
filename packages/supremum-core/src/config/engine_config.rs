//! Engine configuration builder
//!
//! ```rust,ignore
//! // Level 1: preset
//! let config = EngineConfig::preset(Preset::Fast).build()?;
//!
//! // Level 2: override one section
//! let config = EngineConfig::preset(Preset::Balanced)
//!     .diameter(|c| c.exact_threshold(64))
//!     .build()?;
//!
//! // Level 3: YAML
//! let config = EngineConfig::from_yaml("analysis.yaml")?;
//! ```

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, ConfigOverrides};
use super::preset::Preset;
use super::section_configs::{DiameterConfig, HeuristicConfig, SamplingConfig};
use super::validation::Validatable;

/// Engine configuration (builder)
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Base preset
    pub(crate) preset: Preset,

    /// Section overrides (None = preset defaults)
    pub(crate) sampling: Option<SamplingConfig>,
    pub(crate) diameter: Option<DiameterConfig>,
    pub(crate) heuristics: Option<HeuristicConfig>,
}

impl EngineConfig {
    /// Level 1: Create from preset
    pub fn preset(preset: Preset) -> Self {
        Self {
            preset,
            sampling: None,
            diameter: None,
            heuristics: None,
        }
    }

    /// Level 2: Override sampling caps
    pub fn sampling<F>(mut self, f: F) -> Self
    where
        F: FnOnce(SamplingConfig) -> SamplingConfig,
    {
        let base = self
            .sampling
            .take()
            .unwrap_or_else(|| SamplingConfig::from_preset(self.preset));
        self.sampling = Some(f(base));
        self
    }

    /// Level 2: Override diameter selection/budgets
    pub fn diameter<F>(mut self, f: F) -> Self
    where
        F: FnOnce(DiameterConfig) -> DiameterConfig,
    {
        let base = self
            .diameter
            .take()
            .unwrap_or_else(|| DiameterConfig::from_preset(self.preset));
        self.diameter = Some(f(base));
        self
    }

    /// Level 2: Override heuristic tolerances
    pub fn heuristics<F>(mut self, f: F) -> Self
    where
        F: FnOnce(HeuristicConfig) -> HeuristicConfig,
    {
        let base = self
            .heuristics
            .take()
            .unwrap_or_else(|| HeuristicConfig::from_preset(self.preset));
        self.heuristics = Some(f(base));
        self
    }

    pub fn get_preset(&self) -> Preset {
        self.preset
    }

    /// Build and validate
    pub fn build(self) -> ConfigResult<ValidatedConfig> {
        let sampling = self
            .sampling
            .unwrap_or_else(|| SamplingConfig::from_preset(self.preset));
        let diameter = self
            .diameter
            .unwrap_or_else(|| DiameterConfig::from_preset(self.preset));
        let heuristics = self
            .heuristics
            .unwrap_or_else(|| HeuristicConfig::from_preset(self.preset));

        sampling.validate()?;
        diameter.validate()?;
        heuristics.validate()?;

        // Cross-section consistency
        if heuristics.cauchy_min_terms > sampling.max_sequence_terms {
            return Err(ConfigError::Validation(format!(
                "cauchy_min_terms ({}) exceeds max_sequence_terms ({}); the Cauchy test could never run",
                heuristics.cauchy_min_terms, sampling.max_sequence_terms
            )));
        }

        Ok(ValidatedConfig {
            preset: self.preset,
            sampling,
            diameter,
            heuristics,
        })
    }

    /// Load from YAML file (v1 schema)
    pub fn from_yaml(path: &str) -> ConfigResult<ValidatedConfig> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content, path)
    }

    /// Parse YAML text (v1 schema); `origin` is used in log lines only
    ///
    /// Section overrides are patches: fields they omit keep the preset's value.
    pub fn from_yaml_str(content: &str, origin: &str) -> ConfigResult<ValidatedConfig> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        // Version check
        if export.version != 1 {
            return Err(ConfigError::UnsupportedVersion {
                found: export.version,
                supported: vec![1],
            });
        }

        // Parse preset
        let preset = Preset::from_str(&export.preset)
            .map_err(|_| ConfigError::UnknownPreset(export.preset.clone()))?;

        let mut config = Self::preset(preset);
        if let Some(overrides) = export.overrides {
            if let Some(patch) = overrides.sampling {
                config = config.sampling_patch(patch);
            }
            if let Some(patch) = overrides.diameter {
                config = config.diameter_patch(patch);
            }
            if let Some(patch) = overrides.heuristics {
                config = config.heuristics_patch(patch);
            }
        }

        tracing::debug!("Loaded engine config from {} (preset={})", origin, preset);
        config.build()
    }

    /// Export to YAML
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: 1,
            preset: self.preset.to_string(),
            overrides: Some(ConfigOverrides {
                sampling: self.sampling.clone().map(Into::into),
                diameter: self.diameter.clone().map(Into::into),
                heuristics: self.heuristics.clone().map(Into::into),
            }),
        };

        serde_yaml::to_string(&export).map_err(ConfigError::Yaml)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

/// Validated configuration (immutable, safe to use)
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
    preset: Preset,
    sampling: SamplingConfig,
    diameter: DiameterConfig,
    heuristics: HeuristicConfig,
}

impl ValidatedConfig {
    pub fn preset(&self) -> Preset {
        self.preset
    }

    pub fn sampling(&self) -> &SamplingConfig {
        &self.sampling
    }

    pub fn diameter(&self) -> &DiameterConfig {
        &self.diameter
    }

    pub fn heuristics(&self) -> &HeuristicConfig {
        &self.heuristics
    }

    /// Get a human-readable description of the configuration
    pub fn describe(&self) -> String {
        format!(
            "{} [terms={}, curve_samples={}, exact<{}, refine_sample={}, ascent_starts≤{}]",
            self.preset,
            self.sampling.max_sequence_terms,
            self.sampling.max_curve_samples,
            self.diameter.exact_threshold,
            self.diameter.refine_sample_size,
            self.diameter.ascent_max_starts,
        )
    }
}

impl Default for ValidatedConfig {
    fn default() -> Self {
        let preset = Preset::default();
        Self {
            preset,
            sampling: SamplingConfig::from_preset(preset),
            diameter: DiameterConfig::from_preset(preset),
            heuristics: HeuristicConfig::from_preset(preset),
        }
    }
}
