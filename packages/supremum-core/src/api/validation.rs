//! Request validation
//!
//! Rejects malformed component shapes before the core sees them. The core
//! tolerates most of these anyway; validating here turns them into a
//! precise error instead of an excluded component or an empty result.

use super::request::AnalysisRequest;
use crate::config::ValidatedConfig;
use crate::features::formula::find_unsafe_token;
use crate::shared::models::{CurveKind, CurveSurfaceSpec, SequenceSource, SetComponent};
use std::fmt;
use thiserror::Error;

/// Malformed request, located by component index and field
#[derive(Debug, Clone, PartialEq, Error)]
pub struct ValidationError {
    /// Offending component; `None` for request options
    pub index: Option<usize>,
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(index: usize, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            index: Some(index),
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn options(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            index: None,
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "component {}: {}: {}", index, self.field, self.message),
            None => write!(f, "options: {}: {}", self.field, self.message),
        }
    }
}

type Check = Result<(), ValidationError>;

/// Validate every component and the options of `request`
pub fn validate_request(request: &AnalysisRequest, config: &ValidatedConfig) -> Check {
    let max_len = config.sampling().max_formula_len;

    for (index, component) in request.components.iter().enumerate() {
        validate_component(index, component, max_len)?;
    }

    if let Some(domain) = &request.options.bounding_domain {
        if domain.min.is_nan() || domain.max.is_nan() {
            return Err(ValidationError::options("bounding_domain", "bounds must be numbers"));
        }
        if domain.min > domain.max {
            return Err(ValidationError::options(
                "bounding_domain",
                format!("min {} exceeds max {}", domain.min, domain.max),
            ));
        }
    }

    Ok(())
}

fn validate_component(index: usize, component: &SetComponent, max_len: usize) -> Check {
    match component {
        SetComponent::Interval {
            start,
            end,
            left_open,
            right_open,
        } => {
            if start.is_nan() || end.is_nan() {
                return Err(ValidationError::new(index, "start", "endpoints must be numbers"));
            }
            if start > end {
                return Err(ValidationError::new(
                    index,
                    "start",
                    format!("start {} exceeds end {}", start, end),
                ));
            }
            if start.is_infinite() && !left_open {
                return Err(ValidationError::new(index, "left_open", "infinite endpoint must be open"));
            }
            if end.is_infinite() && !right_open {
                return Err(ValidationError::new(index, "right_open", "infinite endpoint must be open"));
            }
            Ok(())
        }

        SetComponent::Finite { points } => {
            for (i, point) in points.iter().enumerate() {
                if point.dim() == 0 {
                    return Err(ValidationError::new(index, format!("points[{}]", i), "point has no coordinates"));
                }
                if !point.is_finite() {
                    return Err(ValidationError::new(
                        index,
                        format!("points[{}]", i),
                        "coordinates must be finite",
                    ));
                }
            }
            Ok(())
        }

        SetComponent::Sequence(spec) => {
            if let SequenceSource::Custom(formula) = &spec.source {
                validate_formula(index, "source.custom", formula, max_len)?;
            }
            let range = spec.index_range;
            if range.start < 1 {
                return Err(ValidationError::new(index, "index_range.start", "indices start at 1"));
            }
            if range.end < range.start {
                return Err(ValidationError::new(
                    index,
                    "index_range.end",
                    format!("end {} is before start {}", range.end, range.start),
                ));
            }
            Ok(())
        }

        SetComponent::CurveSurface(spec) => validate_curve(index, spec, max_len),
    }
}

fn validate_curve(index: usize, spec: &CurveSurfaceSpec, max_len: usize) -> Check {
    for (i, formula) in spec.formulas.iter().enumerate() {
        validate_formula(index, &format!("formulas[{}]", i), formula, max_len)?;
    }

    let (formulas, dims) = match spec.kind {
        CurveKind::Explicit => (1..=1, 1..=2),
        CurveKind::Parametric => (1..=3, 1..=2),
        CurveKind::Implicit => (1..=1, 1..=3),
    };
    if !formulas.contains(&spec.formulas.len()) {
        return Err(ValidationError::new(
            index,
            "formulas",
            format!(
                "{:?} takes {}..={} formulas, got {}",
                spec.kind,
                formulas.start(),
                formulas.end(),
                spec.formulas.len()
            ),
        ));
    }
    if !dims.contains(&spec.domain.len()) {
        return Err(ValidationError::new(
            index,
            "domain",
            format!(
                "{:?} takes a {}..={}-dimensional domain, got {}",
                spec.kind,
                dims.start(),
                dims.end(),
                spec.domain.len()
            ),
        ));
    }
    for (i, range) in spec.domain.iter().enumerate() {
        if !range.min.is_finite() || !range.max.is_finite() || range.min > range.max {
            return Err(ValidationError::new(
                index,
                format!("domain[{}]", i),
                "range must be finite with min <= max",
            ));
        }
    }
    if let Some(axis) = spec.axis {
        let output_dim = match spec.kind {
            CurveKind::Explicit => spec.domain.len() + 1,
            CurveKind::Parametric => spec.formulas.len(),
            CurveKind::Implicit => spec.domain.len(),
        };
        if axis >= output_dim {
            return Err(ValidationError::new(
                index,
                "axis",
                format!("axis {} out of range for {}-dimensional points", axis, output_dim),
            ));
        }
    }
    if spec.sample_count == 0 {
        return Err(ValidationError::new(index, "sample_count", "must be positive"));
    }
    Ok(())
}

fn validate_formula(index: usize, field: &str, formula: &str, max_len: usize) -> Check {
    if formula.trim().is_empty() {
        return Err(ValidationError::new(index, field, "formula is empty"));
    }
    if formula.len() > max_len {
        return Err(ValidationError::new(
            index,
            field,
            format!("formula longer than {} characters", max_len),
        ));
    }
    if let Some(token) = find_unsafe_token(formula) {
        return Err(ValidationError::new(index, field, format!("'{}' is not allowed", token)));
    }
    Ok(())
}
