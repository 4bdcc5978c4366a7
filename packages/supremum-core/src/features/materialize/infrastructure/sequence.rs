//! Sequence term generation
//!
//! Sequences are infinite from their start index. The index range only caps
//! how many terms are generated as points; bounds of custom formulas also
//! look at a local window and a few far-tail samples.

use crate::config::{HeuristicConfig, SamplingConfig};
use crate::features::formula::{CompiledFormula, EvalError, FormulaEvaluator};
use crate::features::materialize::domain::SequenceSamples;
use crate::shared::models::{BoundingDomain, SequenceSource, SequenceSpec};
use tracing::debug;

/// How a single term evaluation ended
enum Term {
    Value(f64),
    /// Overflowed to ±∞ (kept for tail samples only)
    Overflow(f64),
    Skip,
}

fn eval_term(formula: &CompiledFormula, index: u64) -> Result<Term, EvalError> {
    match formula.eval(&[("n", index as f64)]) {
        Ok(value) => Ok(Term::Value(value)),
        Err(err) if err.is_fatal_for_component() => Err(err),
        Err(err) => match err.non_finite_value() {
            Some(v) if v.is_infinite() => Ok(Term::Overflow(v)),
            _ => Ok(Term::Skip),
        },
    }
}

/// Largest index tried when searching for the domain
const MAX_SEARCH_INDEX: u64 = 1 << 62;

fn term_in(formula: &CompiledFormula, index: u64, domain: &BoundingDomain) -> Result<bool, EvalError> {
    Ok(matches!(eval_term(formula, index)?, Term::Value(v) if domain.contains(v)))
}

/// First index after `outside` whose term lies in `domain`
///
/// Tries doubling offsets, then bisects back between the last miss and
/// the first hit. Exact for monotone formulas; for alternating ones the
/// index found is inside the domain but may not be the first.
fn first_index_in(
    formula: &CompiledFormula,
    outside: u64,
    domain: &BoundingDomain,
) -> Result<Option<u64>, EvalError> {
    let mut lo = outside;
    let mut step = 1u64;
    let hi = loop {
        let candidate = match outside.checked_add(step) {
            Some(p) if p <= MAX_SEARCH_INDEX => p,
            _ => return Ok(None),
        };
        if term_in(formula, candidate, domain)? {
            break candidate;
        }
        lo = candidate;
        step = step.saturating_mul(2);
    };

    let mut hi = hi;
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if term_in(formula, mid, domain)? {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    Ok(Some(hi))
}

/// Generates sequence samples under the sampling limits
pub struct SequenceSampler<'a> {
    evaluator: &'a FormulaEvaluator,
    sampling: &'a SamplingConfig,
    heuristics: &'a HeuristicConfig,
}

impl<'a> SequenceSampler<'a> {
    pub fn new(
        evaluator: &'a FormulaEvaluator,
        sampling: &'a SamplingConfig,
        heuristics: &'a HeuristicConfig,
    ) -> Self {
        Self {
            evaluator,
            sampling,
            heuristics,
        }
    }

    /// Sample `spec`, keeping only values inside `domain`
    pub fn sample(
        &self,
        spec: &SequenceSpec,
        domain: Option<&BoundingDomain>,
    ) -> Result<SequenceSamples, EvalError> {
        let start = spec.index_range.start;
        let count = spec.index_range.len().min(self.sampling.max_sequence_terms as u64);
        let in_domain = |v: &f64| domain.map_or(true, |d| d.contains(*v));

        match &spec.source {
            SequenceSource::Preset(preset) => {
                let formula = self.evaluator.compile(preset.formula())?;
                let mut terms: Vec<f64> = self
                    .generate(&formula, start, count)?
                    .into_iter()
                    .filter(in_domain)
                    .collect();

                // The domain may only meet the sequence further out
                if let Some(d) = domain.filter(|_| terms.is_empty()) {
                    let last = start.saturating_add(count.max(1) - 1);
                    if let Some(entry) = first_index_in(&formula, last, d)? {
                        debug!("Sequence {} enters the domain at index {}", preset.as_str(), entry);
                        terms = self
                            .generate(&formula, entry, count)?
                            .into_iter()
                            .filter(in_domain)
                            .collect();
                    }
                }

                Ok(SequenceSamples {
                    preset: Some(*preset),
                    analytic: Some(preset.analytic(start)),
                    terms,
                    window: Vec::new(),
                    tail: Vec::new(),
                })
            }
            SequenceSource::Custom(text) => {
                let formula = self.evaluator.compile(text)?;
                let terms = self.generate(&formula, start, count)?;
                let window = self.generate(&formula, start, self.heuristics.local_window as u64)?;
                let tail = self.sample_tail(&formula, start)?;

                let tail = tail
                    .into_iter()
                    .filter(|v| match domain {
                        None => true,
                        Some(d) if *v == f64::INFINITY => d.max == f64::INFINITY,
                        Some(d) if *v == f64::NEG_INFINITY => d.min == f64::NEG_INFINITY,
                        Some(d) => d.contains(*v),
                    })
                    .collect();

                Ok(SequenceSamples {
                    preset: None,
                    analytic: None,
                    terms: terms.into_iter().filter(in_domain).collect(),
                    window: window.into_iter().filter(in_domain).collect(),
                    tail,
                })
            }
        }
    }

    /// Finite terms at `start, start+1, …` (`count` indices)
    fn generate(
        &self,
        formula: &CompiledFormula,
        start: u64,
        count: u64,
    ) -> Result<Vec<f64>, EvalError> {
        let mut terms = Vec::with_capacity(count as usize);
        for index in start..start.saturating_add(count) {
            if let Term::Value(v) = eval_term(formula, index)? {
                terms.push(v);
            }
        }
        Ok(terms)
    }

    /// Values at `start - 1 + offset` for each configured tail offset
    fn sample_tail(&self, formula: &CompiledFormula, start: u64) -> Result<Vec<f64>, EvalError> {
        let base = start.saturating_sub(1);
        let mut tail = Vec::with_capacity(self.heuristics.tail_indices.len());
        for offset in &self.heuristics.tail_indices {
            match eval_term(formula, base.saturating_add(*offset))? {
                Term::Value(v) | Term::Overflow(v) => tail.push(v),
                Term::Skip => {}
            }
        }
        Ok(tail)
    }
}
