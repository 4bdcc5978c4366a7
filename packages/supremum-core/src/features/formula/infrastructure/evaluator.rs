//! Formula Evaluator - meval-backed, whitelist-only evaluation
//!
//! Parsing is delegated to `meval`; name resolution is not. Every variable
//! and function lookup goes through [`WhitelistContext`], which knows the
//! caller's bindings, the constants `pi`/`e` and the fixed function table.
//! Nothing else is reachable from a formula.
//!
//! # Examples
//!
//! ```rust
//! use supremum_core::features::formula::FormulaEvaluator;
//!
//! let evaluator = FormulaEvaluator::default();
//! let value = evaluator.evaluate("1/n + sqrt(4)", &[("n", 2.0)]).unwrap();
//! assert_eq!(value, 2.5);
//!
//! // Failures are values too
//! let outcome = evaluator.try_evaluate("1/q", &[]);
//! assert_eq!(outcome.value, None);
//! assert_eq!(outcome.reason, Some("unbound_variable"));
//! ```

use super::denylist::find_unsafe_token;
use super::grammar::grammar_violation;
use crate::features::formula::domain::{EvalError, Evaluation, EvaluationFailure, CONSTANTS};
use meval::{ContextProvider, Expr, FuncEvalError};

/// Default cap on formula text length
pub const DEFAULT_MAX_FORMULA_LEN: usize = 256;

/// Variable bindings: name → value
pub type Bindings<'a> = &'a [(&'a str, f64)];

/// Name resolution for one evaluation
struct WhitelistContext<'a> {
    bindings: Bindings<'a>,
}

impl ContextProvider for WhitelistContext<'_> {
    fn get_var(&self, name: &str) -> Option<f64> {
        self.bindings
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
            .or_else(|| CONSTANTS.iter().find(|(n, _)| *n == name).map(|(_, v)| *v))
    }

    fn eval_func(&self, name: &str, args: &[f64]) -> Result<f64, FuncEvalError> {
        if name == "pow" {
            return match args {
                [base, exponent] => Ok(base.powf(*exponent)),
                _ => Err(FuncEvalError::NumberArgs(2)),
            };
        }

        let unary: fn(f64) -> f64 = match name {
            "abs" => f64::abs,
            "sqrt" => f64::sqrt,
            "sin" => f64::sin,
            "cos" => f64::cos,
            "tan" => f64::tan,
            "asin" => f64::asin,
            "acos" => f64::acos,
            "atan" => f64::atan,
            "sinh" => f64::sinh,
            "cosh" => f64::cosh,
            "tanh" => f64::tanh,
            "exp" => f64::exp,
            "log" => f64::ln,
            "log2" => f64::log2,
            "log10" => f64::log10,
            "floor" => f64::floor,
            "ceil" => f64::ceil,
            "round" => f64::round,
            "sign" => sign,
            _ => return Err(FuncEvalError::UnknownFunction),
        };

        match args {
            [x] => Ok(unary(*x)),
            _ => Err(FuncEvalError::NumberArgs(1)),
        }
    }
}

/// sign(0) = 0, unlike `f64::signum`
fn sign(x: f64) -> f64 {
    if x == 0.0 || x.is_nan() {
        x
    } else {
        x.signum()
    }
}

fn classify(err: meval::Error) -> EvalError {
    match err {
        meval::Error::UnknownVariable(name) => {
            EvalError::Evaluation(EvaluationFailure::UnboundVariable(name))
        }
        meval::Error::Function(name, reason) => {
            EvalError::Evaluation(EvaluationFailure::Function(format!("{}: {:?}", name, reason)))
        }
        other => EvalError::Parse(other.to_string()),
    }
}

/// A parsed formula, ready to be evaluated many times
#[derive(Debug, Clone)]
pub struct CompiledFormula {
    source: String,
    expr: Expr,
}

impl CompiledFormula {
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluate at `bindings`; non-finite results are errors
    pub fn eval(&self, bindings: Bindings<'_>) -> Result<f64, EvalError> {
        let value = self
            .expr
            .eval_with_context(WhitelistContext { bindings })
            .map_err(classify)?;

        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::Evaluation(EvaluationFailure::NonFinite(value)))
        }
    }
}

/// Sandboxed expression evaluator
#[derive(Debug, Clone)]
pub struct FormulaEvaluator {
    max_len: usize,
}

impl FormulaEvaluator {
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }

    /// Check the denylist, then parse
    pub fn compile(&self, expression: &str) -> Result<CompiledFormula, EvalError> {
        if expression.len() > self.max_len {
            return Err(EvalError::Unsafe(format!(
                "expression longer than {} characters",
                self.max_len
            )));
        }
        if let Some(token) = find_unsafe_token(expression) {
            return Err(EvalError::Unsafe(token));
        }
        if expression.trim().is_empty() {
            return Err(EvalError::Parse("empty expression".to_string()));
        }
        if let Some(reason) = grammar_violation(expression) {
            return Err(EvalError::Parse(reason));
        }

        let expr: Expr = expression.parse().map_err(|e: meval::Error| EvalError::Parse(e.to_string()))?;
        Ok(CompiledFormula {
            source: expression.to_string(),
            expr,
        })
    }

    /// One-shot evaluation
    pub fn evaluate(&self, expression: &str, bindings: Bindings<'_>) -> Result<f64, EvalError> {
        self.compile(expression)?.eval(bindings)
    }

    /// One-shot evaluation that reports failure as `value: None` plus a reason code
    pub fn try_evaluate(&self, expression: &str, bindings: Bindings<'_>) -> Evaluation {
        self.evaluate(expression, bindings).into()
    }
}

impl Default for FormulaEvaluator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FORMULA_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{E, PI};

    fn eval(expr: &str) -> Result<f64, EvalError> {
        FormulaEvaluator::default().evaluate(expr, &[])
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_arithmetic_and_precedence() {
        assert_eq!(eval("1 + 2 * 3").unwrap(), 7.0);
        assert_eq!(eval("(1 + 2) * 3").unwrap(), 9.0);
        assert_eq!(eval("2 ^ 3").unwrap(), 8.0);
        assert_eq!(eval("-4 + 10 / 4").unwrap(), -1.5);
    }

    #[test]
    fn test_constants() {
        assert!(approx(eval("pi").unwrap(), PI));
        assert!(approx(eval("e").unwrap(), E));
    }

    #[test]
    fn test_whitelisted_functions() {
        assert_eq!(eval("abs(-3)").unwrap(), 3.0);
        assert_eq!(eval("sqrt(16)").unwrap(), 4.0);
        assert!(approx(eval("sin(pi / 2)").unwrap(), 1.0));
        assert!(approx(eval("log(e)").unwrap(), 1.0));
        assert_eq!(eval("log2(8)").unwrap(), 3.0);
        assert_eq!(eval("log10(1000)").unwrap(), 3.0);
        assert_eq!(eval("floor(2.7) + ceil(2.1)").unwrap(), 5.0);
        assert_eq!(eval("round(2.5)").unwrap(), 3.0);
        assert_eq!(eval("pow(2, 10)").unwrap(), 1024.0);
        assert_eq!(eval("sign(-2) + sign(0) + sign(5)").unwrap(), 0.0);
        assert!(approx(eval("atan(1) * 4").unwrap(), PI));
        assert!(approx(eval("cosh(0) + tanh(0)").unwrap(), 1.0));
    }

    #[test]
    fn test_bindings() {
        let evaluator = FormulaEvaluator::default();
        let v = evaluator.evaluate("n / (n + 1)", &[("n", 3.0)]).unwrap();
        assert_eq!(v, 0.75);
        let v = evaluator
            .evaluate("x^2 + y^2", &[("x", 3.0), ("y", 4.0)])
            .unwrap();
        assert_eq!(v, 25.0);
    }

    #[test]
    fn test_binding_shadows_constant() {
        let evaluator = FormulaEvaluator::default();
        assert_eq!(evaluator.evaluate("e", &[("e", 2.0)]).unwrap(), 2.0);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(eval("1 +"), Err(EvalError::Parse(_))));
        assert!(matches!(eval("(1 + 2"), Err(EvalError::Parse(_))));
        assert!(matches!(eval("   "), Err(EvalError::Parse(_))));
    }

    #[test]
    fn test_unsafe_checked_before_parse() {
        assert!(matches!(eval("process.exit(1)"), Err(EvalError::Unsafe(_))));
        // Would also be a parse error; denylist wins
        assert!(matches!(eval("1; 2"), Err(EvalError::Unsafe(_))));
    }

    #[test]
    fn test_length_cap() {
        let evaluator = FormulaEvaluator::new(8);
        assert!(matches!(
            evaluator.compile("1+1+1+1+1"),
            Err(EvalError::Unsafe(_))
        ));
        assert!(evaluator.compile("1+1").is_ok());
    }

    #[test]
    fn test_non_whitelisted_function_fails_compile() {
        let evaluator = FormulaEvaluator::default();
        assert_eq!(
            evaluator.compile("max(1, 2)").unwrap_err(),
            EvalError::Parse("unknown function 'max'".to_string())
        );
        let outcome = evaluator.try_evaluate("max(1, 2)", &[]);
        assert_eq!(outcome.value, None);
        assert_eq!(outcome.reason, Some("parse_error"));
    }

    #[test]
    fn test_remainder_operator_rejected() {
        let evaluator = FormulaEvaluator::default();
        assert!(matches!(evaluator.compile("5 % 3"), Err(EvalError::Parse(_))));
        assert_eq!(
            evaluator.try_evaluate("n % 2", &[("n", 3.0)]).reason,
            Some("parse_error")
        );
    }

    #[test]
    fn test_wrong_arity() {
        assert_eq!(eval("sqrt(1, 2)").unwrap_err().reason_code(), "function_error");
        assert_eq!(eval("pow(2)").unwrap_err().reason_code(), "function_error");
    }

    #[test]
    fn test_unbound_variable() {
        let err = eval("x + 1").unwrap_err();
        assert_eq!(
            err,
            EvalError::Evaluation(EvaluationFailure::UnboundVariable("x".to_string()))
        );
    }

    #[test]
    fn test_non_finite_is_error() {
        let err = eval("1 / 0").unwrap_err();
        assert_eq!(err.reason_code(), "non_finite");
        assert_eq!(err.non_finite_value(), Some(f64::INFINITY));

        let err = eval("sqrt(-1)").unwrap_err();
        assert_eq!(err.reason_code(), "non_finite");
    }

    #[test]
    fn test_compiled_formula_reuse() {
        let compiled = FormulaEvaluator::default().compile("1/n").unwrap();
        assert_eq!(compiled.source(), "1/n");
        let values: Vec<f64> = (1..=4)
            .map(|n| compiled.eval(&[("n", n as f64)]).unwrap())
            .collect();
        assert_eq!(values, vec![1.0, 0.5, 1.0 / 3.0, 0.25]);
    }

    #[test]
    fn test_try_evaluate_reports_reason() {
        let evaluator = FormulaEvaluator::default();
        let outcome = evaluator.try_evaluate("log(0)", &[]);
        assert_eq!(outcome.value, None);
        assert_eq!(outcome.reason, Some("non_finite"));

        let outcome = evaluator.try_evaluate("2 * pi", &[]);
        assert!(outcome.reason.is_none());
    }
}
