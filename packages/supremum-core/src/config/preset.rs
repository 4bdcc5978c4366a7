//! Preset configurations
//!
//! Presets provide complete default configurations for common use cases.

use serde::{Deserialize, Serialize};

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Interactive use: small samples
    ///
    /// - Sequences: 50 terms
    /// - Curves: ≤ 500 samples, grid ≤ 40 per axis
    /// - Diameter: refine sample 100, 5 ascent starts
    Fast,

    /// Default
    ///
    /// - Sequences: 100 terms
    /// - Curves: ≤ 2000 samples, grid ≤ 80 per axis
    /// - Diameter: refine sample 200, 10 ascent starts
    Balanced,

    /// Offline/reporting: denser sampling
    ///
    /// - Sequences: 150 terms
    /// - Curves: ≤ 8000 samples, grid ≤ 160 per axis
    /// - Diameter: refine sample 400, 20 ascent starts
    Thorough,
}

impl Preset {
    /// Parse preset from string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "fast" => Ok(Self::Fast),
            "balanced" => Ok(Self::Balanced),
            "thorough" => Ok(Self::Thorough),
            _ => Err(format!(
                "Unknown preset '{}'. Valid presets: fast, balanced, thorough",
                s
            )),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Balanced => "balanced",
            Self::Thorough => "thorough",
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::Balanced
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
