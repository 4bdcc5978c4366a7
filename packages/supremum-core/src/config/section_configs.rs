//! Section-specific configuration types
//!
//! Each engine stage has its own configuration struct with validation:
//! - `SamplingConfig`: caps that bound worst-case runtime
//! - `DiameterConfig`: algorithm selection thresholds and budgets
//! - `HeuristicConfig`: divergence/Cauchy/membership tolerances

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use super::validation::{check_f64, check_usize, Validatable};
use serde::{Deserialize, Serialize};

// ============================================================================
// Sampling
// ============================================================================

/// Sampling caps applied while materializing components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Maximum generated terms per sequence (1..=10000)
    pub max_sequence_terms: usize,

    /// Maximum samples per curve/surface component (2..=100000)
    pub max_curve_samples: usize,

    /// Maximum grid points per axis for surfaces and level sets (2..=1000)
    pub max_grid_resolution: usize,

    /// Level-set membership threshold: |F| < threshold (0..=10)
    pub implicit_threshold: f64,

    /// Longest accepted formula text (1..=4096)
    pub max_formula_len: usize,
}

impl SamplingConfig {
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Fast => Self {
                max_sequence_terms: 50,
                max_curve_samples: 500,
                max_grid_resolution: 40,
                implicit_threshold: 0.1,
                max_formula_len: 256,
            },
            Preset::Balanced => Self {
                max_sequence_terms: 100,
                max_curve_samples: 2000,
                max_grid_resolution: 80,
                implicit_threshold: 0.1,
                max_formula_len: 256,
            },
            Preset::Thorough => Self {
                max_sequence_terms: 150,
                max_curve_samples: 8000,
                max_grid_resolution: 160,
                implicit_threshold: 0.1,
                max_formula_len: 512,
            },
        }
    }

    /// Builder: Set max_sequence_terms
    pub fn max_sequence_terms(mut self, v: usize) -> Self {
        self.max_sequence_terms = v;
        self
    }

    /// Builder: Set max_curve_samples
    pub fn max_curve_samples(mut self, v: usize) -> Self {
        self.max_curve_samples = v;
        self
    }

    /// Builder: Set max_grid_resolution
    pub fn max_grid_resolution(mut self, v: usize) -> Self {
        self.max_grid_resolution = v;
        self
    }

    /// Builder: Set implicit_threshold
    pub fn implicit_threshold(mut self, v: f64) -> Self {
        self.implicit_threshold = v;
        self
    }

    /// Builder: Set max_formula_len
    pub fn max_formula_len(mut self, v: usize) -> Self {
        self.max_formula_len = v;
        self
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Balanced)
    }
}

impl Validatable for SamplingConfig {
    fn validate(&self) -> ConfigResult<()> {
        check_usize(
            "max_sequence_terms",
            self.max_sequence_terms,
            1,
            10_000,
            "At least one sequence term must be generated",
        )?;
        check_usize(
            "max_curve_samples",
            self.max_curve_samples,
            2,
            100_000,
            "A curve needs at least two samples",
        )?;
        check_usize(
            "max_grid_resolution",
            self.max_grid_resolution,
            2,
            1_000,
            "Grid resolution is per axis; 3-D grids grow cubically",
        )?;
        if !(self.implicit_threshold > 0.0 && self.implicit_threshold <= 10.0) {
            return Err(ConfigError::range_with_hint(
                "implicit_threshold",
                self.implicit_threshold,
                "0 (exclusive)",
                10,
                "Level-set threshold must be positive",
            ));
        }
        check_usize(
            "max_formula_len",
            self.max_formula_len,
            1,
            4_096,
            "Formula length cap must be reasonable",
        )
    }

    fn config_name(&self) -> &'static str {
        "SamplingConfig"
    }
}

// ============================================================================
// Diameter
// ============================================================================

/// Diameter algorithm selection and budgets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiameterConfig {
    /// Below this point count the exact all-pairs scan runs (2..=10000)
    pub exact_threshold: usize,

    /// Strided sample size for the sampled-refine algorithm (2..=10000)
    pub refine_sample_size: usize,

    /// Upper bound on ascent starts; actual K = min(this, n / 10) (1..=100)
    pub ascent_max_starts: usize,

    /// Iteration cap per ascent start (1..=1000)
    pub ascent_max_iterations: usize,

    /// Points examined per ascent scan; larger clouds are strided (10..=1000000)
    pub ascent_scan_budget: usize,
}

impl DiameterConfig {
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Fast => Self {
                exact_threshold: 100,
                refine_sample_size: 100,
                ascent_max_starts: 5,
                ascent_max_iterations: 50,
                ascent_scan_budget: 500,
            },
            Preset::Balanced => Self {
                exact_threshold: 100,
                refine_sample_size: 200,
                ascent_max_starts: 10,
                ascent_max_iterations: 50,
                ascent_scan_budget: 1_000,
            },
            Preset::Thorough => Self {
                exact_threshold: 100,
                refine_sample_size: 400,
                ascent_max_starts: 20,
                ascent_max_iterations: 50,
                ascent_scan_budget: 4_000,
            },
        }
    }

    /// Builder: Set exact_threshold
    pub fn exact_threshold(mut self, v: usize) -> Self {
        self.exact_threshold = v;
        self
    }

    /// Builder: Set refine_sample_size
    pub fn refine_sample_size(mut self, v: usize) -> Self {
        self.refine_sample_size = v;
        self
    }

    /// Builder: Set ascent_max_starts
    pub fn ascent_max_starts(mut self, v: usize) -> Self {
        self.ascent_max_starts = v;
        self
    }

    /// Builder: Set ascent_max_iterations
    pub fn ascent_max_iterations(mut self, v: usize) -> Self {
        self.ascent_max_iterations = v;
        self
    }

    /// Builder: Set ascent_scan_budget
    pub fn ascent_scan_budget(mut self, v: usize) -> Self {
        self.ascent_scan_budget = v;
        self
    }
}

impl Default for DiameterConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Balanced)
    }
}

impl Validatable for DiameterConfig {
    fn validate(&self) -> ConfigResult<()> {
        check_usize(
            "exact_threshold",
            self.exact_threshold,
            2,
            10_000,
            "All-pairs scans are quadratic",
        )?;
        check_usize(
            "refine_sample_size",
            self.refine_sample_size,
            2,
            10_000,
            "Sample is scanned exactly, keep it small",
        )?;
        check_usize(
            "ascent_max_starts",
            self.ascent_max_starts,
            1,
            100,
            "At least one ascent start is required",
        )?;
        check_usize(
            "ascent_max_iterations",
            self.ascent_max_iterations,
            1,
            1_000,
            "Ascent iterations must be finite",
        )?;
        check_usize(
            "ascent_scan_budget",
            self.ascent_scan_budget,
            10,
            1_000_000,
            "Scan budget bounds each ascent pass",
        )
    }

    fn config_name(&self) -> &'static str {
        "DiameterConfig"
    }
}

// ============================================================================
// Heuristics
// ============================================================================

/// Tolerances and sample positions of the heuristic detectors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeuristicConfig {
    /// Leading terms sampled for a custom sequence's local max/min (1..=10000)
    pub local_window: usize,

    /// Far indices (relative to the first index) sampled for the tail trend
    pub tail_indices: Vec<u64>,

    /// Tail values beyond this magnitude mark divergence
    pub divergence_magnitude: f64,

    /// Final increment of a monotone tail that marks slow divergence
    pub divergence_increment: f64,

    /// Last-two-terms distance below which a sequence is called Cauchy
    pub cauchy_threshold: f64,

    /// Minimum generated terms before the Cauchy test applies (2..=10000)
    pub cauchy_min_terms: usize,

    /// Tolerance for "limit lies in the set" tests
    pub membership_tolerance: f64,

    /// Tolerance for "sup is attained" comparisons
    pub attainment_epsilon: f64,

    /// Distance to a catalogued irrational that counts as a match
    pub irrational_tolerance: f64,
}

impl HeuristicConfig {
    pub fn from_preset(_preset: Preset) -> Self {
        Self {
            local_window: 100,
            tail_indices: vec![1_000, 10_000, 100_000],
            divergence_magnitude: 1e4,
            divergence_increment: 0.1,
            cauchy_threshold: 0.05,
            cauchy_min_terms: 6,
            membership_tolerance: 1e-6,
            attainment_epsilon: 1e-9,
            irrational_tolerance: 1e-7,
        }
    }

    /// Builder: Set local_window
    pub fn local_window(mut self, v: usize) -> Self {
        self.local_window = v;
        self
    }

    /// Builder: Set tail_indices
    pub fn tail_indices(mut self, v: Vec<u64>) -> Self {
        self.tail_indices = v;
        self
    }

    /// Builder: Set divergence_magnitude
    pub fn divergence_magnitude(mut self, v: f64) -> Self {
        self.divergence_magnitude = v;
        self
    }

    /// Builder: Set cauchy_threshold
    pub fn cauchy_threshold(mut self, v: f64) -> Self {
        self.cauchy_threshold = v;
        self
    }

    /// Builder: Set membership_tolerance
    pub fn membership_tolerance(mut self, v: f64) -> Self {
        self.membership_tolerance = v;
        self
    }
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Balanced)
    }
}

impl Validatable for HeuristicConfig {
    fn validate(&self) -> ConfigResult<()> {
        check_usize(
            "local_window",
            self.local_window,
            1,
            10_000,
            "Local window must contain at least one term",
        )?;

        if self.tail_indices.len() < 2 {
            return Err(ConfigError::Validation(
                "tail_indices needs at least two indices to observe a trend".to_string(),
            ));
        }
        if self.tail_indices[0] == 0 || self.tail_indices.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ConfigError::Validation(format!(
                "tail_indices must be positive and strictly increasing, got {:?}",
                self.tail_indices
            )));
        }

        check_f64(
            "divergence_magnitude",
            self.divergence_magnitude,
            1.0,
            1e300,
            "Magnitude threshold must be a large positive number",
        )?;
        check_f64(
            "divergence_increment",
            self.divergence_increment,
            0.0,
            1e6,
            "Increment threshold must be non-negative",
        )?;
        check_f64(
            "cauchy_threshold",
            self.cauchy_threshold,
            f64::MIN_POSITIVE,
            1e6,
            "Cauchy threshold must be positive",
        )?;
        check_usize(
            "cauchy_min_terms",
            self.cauchy_min_terms,
            2,
            10_000,
            "Two terms are needed to measure a gap",
        )?;
        check_f64(
            "membership_tolerance",
            self.membership_tolerance,
            0.0,
            1.0,
            "Membership tolerance is an absolute distance",
        )?;
        check_f64(
            "attainment_epsilon",
            self.attainment_epsilon,
            0.0,
            1.0,
            "Attainment epsilon is an absolute distance",
        )?;
        check_f64(
            "irrational_tolerance",
            self.irrational_tolerance,
            0.0,
            1e-2,
            "Wide tolerances match rationals near the catalogue constants",
        )
    }

    fn config_name(&self) -> &'static str {
        "HeuristicConfig"
    }
}
