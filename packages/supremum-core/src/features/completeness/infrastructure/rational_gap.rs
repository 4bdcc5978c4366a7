//! Rational-universe gap detection
//!
//! A catalogue lookup, not an irrationality test: a bound is reported as
//! missing from ℚ only when it matches one of a handful of known irrationals.

use crate::features::completeness::domain::match_irrational;
use crate::shared::models::Universe;
use tracing::debug;

/// Whether a real bound has no counterpart in `universe`
pub fn detect_gap(bound: Option<f64>, universe: Universe, tolerance: f64) -> bool {
    if universe != Universe::Rational {
        return false;
    }
    match bound.and_then(|v| match_irrational(v, tolerance).map(|name| (v, name))) {
        Some((value, name)) => {
            debug!("Bound {} matches {}, absent from Q", value, name);
            true
        }
        None => false,
    }
}
