//! Configuration validation
//!
//! Every configuration section implements [`Validatable`]; the builder
//! validates all sections before handing out a [`super::ValidatedConfig`].

use super::error::{ConfigError, ConfigResult};

/// Trait for validatable configuration objects
pub trait Validatable {
    /// Validate the configuration
    ///
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Get the configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

/// Check `min <= value <= max` for an integer field
pub(crate) fn check_usize(
    field: &str,
    value: usize,
    min: usize,
    max: usize,
    hint: &str,
) -> ConfigResult<()> {
    if value < min || value > max {
        return Err(ConfigError::range_with_hint(field, value, min, max, hint));
    }
    Ok(())
}

/// Check `min <= value <= max` for a float field (NaN always fails)
pub(crate) fn check_f64(field: &str, value: f64, min: f64, max: f64, hint: &str) -> ConfigResult<()> {
    if !(value >= min && value <= max) {
        return Err(ConfigError::range_with_hint(field, value, min, max, hint));
    }
    Ok(())
}
