//! Configuration System
//!
//! Three levels of control:
//! - Level 1: Preset (`fast`, `balanced`, `thorough`)
//! - Level 2: Section override via closures (`sampling`, `diameter`, `heuristics`)
//! - Level 3: YAML v1 file
//!
//! # Examples
//!
//! ```rust
//! use supremum_core::config::{EngineConfig, Preset};
//!
//! let config = EngineConfig::preset(Preset::Balanced)
//!     .heuristics(|h| h.cauchy_threshold(0.01))
//!     .build()
//!     .unwrap();
//! assert_eq!(config.heuristics().cauchy_threshold, 0.01);
//! ```

pub mod engine_config;
pub mod error;
pub mod io;
pub mod patch;
pub mod preset;
pub mod section_configs;
pub mod validation;

// Re-exports
pub use engine_config::{EngineConfig, ValidatedConfig};
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigExportV1, ConfigOverrides};
pub use patch::{DiameterConfigPatch, HeuristicConfigPatch, SamplingConfigPatch};
pub use preset::Preset;
pub use section_configs::{DiameterConfig, HeuristicConfig, SamplingConfig};
pub use validation::Validatable;
