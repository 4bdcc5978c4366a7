//! Formula domain models
//!
//! Error taxonomy and reason codes of the evaluator. Pure types, no parsing.

use serde::Serialize;
use thiserror::Error;

/// Constants available to every formula
pub const CONSTANTS: &[(&str, f64)] = &[("pi", std::f64::consts::PI), ("e", std::f64::consts::E)];

/// Whitelisted function names
pub const FUNCTIONS: &[&str] = &[
    "abs", "sqrt", "sin", "cos", "tan", "asin", "acos", "atan", "sinh", "cosh", "tanh", "exp",
    "log", "log2", "log10", "floor", "ceil", "round", "sign", "pow",
];

/// Why an evaluation produced no value
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationFailure {
    /// A variable without a binding was referenced
    UnboundVariable(String),
    /// The result (or an intermediate) was NaN or ±∞
    NonFinite(f64),
    /// Function call failed (unknown name or wrong arity)
    Function(String),
}

impl std::fmt::Display for EvaluationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundVariable(name) => write!(f, "unbound variable '{}'", name),
            Self::NonFinite(value) => write!(f, "non-finite result {}", value),
            Self::Function(detail) => write!(f, "function error: {}", detail),
        }
    }
}

/// Formula evaluation error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Invalid syntax
    #[error("parse error: {0}")]
    Parse(String),

    /// Raw text matched the denylist (checked before parsing)
    #[error("unsafe expression: '{0}' is not allowed")]
    Unsafe(String),

    /// Evaluation raised
    #[error("evaluation error: {0}")]
    Evaluation(EvaluationFailure),
}

impl EvalError {
    /// Stable machine-readable reason code
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "parse_error",
            Self::Unsafe(_) => "unsafe_expression",
            Self::Evaluation(EvaluationFailure::UnboundVariable(_)) => "unbound_variable",
            Self::Evaluation(EvaluationFailure::NonFinite(_)) => "non_finite",
            Self::Evaluation(EvaluationFailure::Function(_)) => "function_error",
        }
    }

    /// Raw non-finite value, when that is what failed
    pub fn non_finite_value(&self) -> Option<f64> {
        match self {
            Self::Evaluation(EvaluationFailure::NonFinite(v)) => Some(*v),
            _ => None,
        }
    }

    /// Compile-time failures make the whole component unusable
    pub fn is_fatal_for_component(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::Unsafe(_))
            || matches!(
                self,
                Self::Evaluation(EvaluationFailure::UnboundVariable(_) | EvaluationFailure::Function(_))
            )
    }
}

/// Value-or-reason outcome for callers that must not propagate errors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub value: Option<f64>,
    pub reason: Option<&'static str>,
}

impl Evaluation {
    pub fn ok(value: f64) -> Self {
        Self {
            value: Some(value),
            reason: None,
        }
    }

    pub fn failed(err: &EvalError) -> Self {
        Self {
            value: None,
            reason: Some(err.reason_code()),
        }
    }
}

impl From<Result<f64, EvalError>> for Evaluation {
    fn from(result: Result<f64, EvalError>) -> Self {
        match result {
            Ok(v) => Self::ok(v),
            Err(e) => Self::failed(&e),
        }
    }
}
