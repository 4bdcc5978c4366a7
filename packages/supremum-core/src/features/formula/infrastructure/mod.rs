//! Formula infrastructure: denylist and grammar screening, meval-backed evaluation

mod denylist;
mod evaluator;
mod grammar;

pub use denylist::find_unsafe_token;
pub use evaluator::{Bindings, CompiledFormula, FormulaEvaluator, DEFAULT_MAX_FORMULA_LEN};
