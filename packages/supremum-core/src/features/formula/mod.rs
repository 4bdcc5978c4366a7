//! Formula Evaluation
//!
//! Sandboxed evaluation of user expressions at given variable bindings.
//!
//! ## Grammar
//!
//! - Operators: `+ - * / ^`, unary minus, parentheses
//! - Constants: `pi`, `e`
//! - Functions: `abs sqrt sin cos tan asin acos atan sinh cosh tanh exp log log2
//!   log10 floor ceil round sign pow`
//!
//! ## Failure modes
//!
//! | Error        | Reason code          | When                                  |
//! |--------------|----------------------|---------------------------------------|
//! | `Unsafe`     | `unsafe_expression`  | denylisted token (before parsing)     |
//! | `Parse`      | `parse_error`        | invalid syntax, `%`, unknown function |
//! | `Evaluation` | `unbound_variable`   | variable without binding              |
//! | `Evaluation` | `non_finite`         | NaN / ±∞ result                       |
//! | `Evaluation` | `function_error`     | wrong arity                           |

pub mod domain;
pub mod infrastructure;

pub use domain::{EvalError, Evaluation, EvaluationFailure, CONSTANTS, FUNCTIONS};
pub use infrastructure::{
    find_unsafe_token, Bindings, CompiledFormula, FormulaEvaluator, DEFAULT_MAX_FORMULA_LEN,
};
