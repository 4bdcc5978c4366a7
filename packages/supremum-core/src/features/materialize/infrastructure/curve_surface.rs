//! Curve / surface sampling over an evenly spaced grid
//!
//! | kind       | inputs          | point                    |
//! |------------|-----------------|--------------------------|
//! | explicit   | x or (x, y)     | (x, f) or (x, y, f)      |
//! | parametric | t or (u, v)     | (f₁, …, fₖ), k ≤ 3       |
//! | implicit   | x, (x, y), …    | inputs where \|F\| < τ   |

use crate::config::SamplingConfig;
use crate::features::formula::{CompiledFormula, FormulaEvaluator};
use crate::features::materialize::domain::MaterializeError;
use crate::shared::models::{CurveKind, CurveSurfaceSpec, Point};

/// Samples curve/surface components
pub struct CurveSampler<'a> {
    evaluator: &'a FormulaEvaluator,
    sampling: &'a SamplingConfig,
}

impl<'a> CurveSampler<'a> {
    pub fn new(evaluator: &'a FormulaEvaluator, sampling: &'a SamplingConfig) -> Self {
        Self {
            evaluator,
            sampling,
        }
    }

    /// Grid points per input axis for a domain of dimension `dim`
    pub fn resolution(&self, sample_count: usize, dim: usize) -> usize {
        let budget = sample_count.clamp(2, self.sampling.max_curve_samples.max(2));
        if dim <= 1 {
            return budget;
        }
        let per_axis = ((budget as f64).powf(1.0 / dim as f64) + 1e-9).floor() as usize;
        per_axis.max(2).min(self.sampling.max_grid_resolution.max(2))
    }

    pub fn sample(&self, spec: &CurveSurfaceSpec) -> Result<Vec<Point>, MaterializeError> {
        check_shape(spec)?;

        let formulas = spec
            .formulas
            .iter()
            .map(|f| self.evaluator.compile(f))
            .collect::<Result<Vec<CompiledFormula>, _>>()?;

        let dim = spec.domain.len();
        let variables = spec.kind.variables(dim);
        let resolution = self.resolution(spec.sample_count, dim);
        let total = resolution.pow(dim as u32);

        let mut points = Vec::new();
        let mut inputs = vec![0.0; dim];
        let mut bindings: Vec<(&str, f64)> = Vec::with_capacity(dim);

        for flat in 0..total {
            let mut rest = flat;
            for (axis, range) in spec.domain.iter().enumerate() {
                let k = rest % resolution;
                rest /= resolution;
                inputs[axis] = range.min + (range.max - range.min) * k as f64 / (resolution - 1) as f64;
            }

            bindings.clear();
            bindings.extend(variables.iter().copied().zip(inputs.iter().copied()));

            if let Some(point) = self.sample_at(spec.kind, &formulas, &inputs, &bindings)? {
                points.push(point);
            }
        }

        Ok(points)
    }

    /// One grid node; `Ok(None)` when the node yields no finite point
    fn sample_at(
        &self,
        kind: CurveKind,
        formulas: &[CompiledFormula],
        inputs: &[f64],
        bindings: &[(&str, f64)],
    ) -> Result<Option<Point>, MaterializeError> {
        let mut values = Vec::with_capacity(formulas.len());
        for formula in formulas {
            match formula.eval(bindings) {
                Ok(v) => values.push(v),
                Err(err) if err.is_fatal_for_component() => return Err(err.into()),
                Err(_) => return Ok(None),
            }
        }

        let point = match kind {
            CurveKind::Explicit => {
                let mut coords = inputs.to_vec();
                coords.extend(values);
                Some(Point::new(coords))
            }
            CurveKind::Parametric => Some(Point::new(values)),
            CurveKind::Implicit => {
                (values[0].abs() < self.sampling.implicit_threshold).then(|| Point::new(inputs.to_vec()))
            }
        };
        Ok(point)
    }
}

fn check_shape(spec: &CurveSurfaceSpec) -> Result<(), MaterializeError> {
    let dim = spec.domain.len();
    let formulas = spec.formulas.len();

    let ok = match spec.kind {
        CurveKind::Explicit => formulas == 1 && (1..=2).contains(&dim),
        CurveKind::Parametric => (1..=3).contains(&formulas) && (1..=2).contains(&dim),
        CurveKind::Implicit => formulas == 1 && (1..=3).contains(&dim),
    };

    if ok && spec.domain.iter().all(|r| r.min.is_finite() && r.max.is_finite()) {
        Ok(())
    } else {
        Err(MaterializeError::Shape(format!(
            "{:?} with {} formula(s) over a {}-dimensional domain",
            spec.kind, formulas, dim
        )))
    }
}
