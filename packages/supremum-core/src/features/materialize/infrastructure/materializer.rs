//! Component dispatch: SetComponent → MaterializedComponent
//!
//! A failing component is recorded in `excluded` and skipped; the
//! remaining components are still analysed.

use super::curve_surface::CurveSampler;
use super::sequence::SequenceSampler;
use crate::config::ValidatedConfig;
use crate::features::formula::FormulaEvaluator;
use crate::features::materialize::domain::{
    IntervalExtent, Materialization, Materialized, MaterializedComponent, PointOrigin,
};
use crate::shared::models::{AnalysisOptions, BoundingDomain, Point, SetComponent};
use tracing::debug;

pub struct Materializer<'a> {
    config: &'a ValidatedConfig,
    evaluator: FormulaEvaluator,
}

impl<'a> Materializer<'a> {
    pub fn new(config: &'a ValidatedConfig) -> Self {
        Self {
            config,
            evaluator: FormulaEvaluator::new(config.sampling().max_formula_len),
        }
    }

    pub fn materialize(&self, components: &[SetComponent], options: &AnalysisOptions) -> Materialization {
        let domain = options.bounding_domain.as_ref();
        let mut out = Materialization::default();

        for (index, component) in components.iter().enumerate() {
            match component {
                SetComponent::Interval {
                    start,
                    end,
                    left_open,
                    right_open,
                } => {
                    if start.is_nan() || end.is_nan() {
                        out.exclude(index, "invalid_interval", "interval endpoint is NaN");
                        continue;
                    }
                    let extent = IntervalExtent::new(*start, *end, *left_open, *right_open);
                    let extent = match domain {
                        Some(d) => extent.clip(d),
                        None => extent,
                    };
                    if extent.is_empty() {
                        debug!("Component {} interval is empty, skipped", index);
                        continue;
                    }
                    out.components.push(MaterializedComponent {
                        index,
                        body: Materialized::Interval(extent),
                    });
                }

                SetComponent::Finite { points } => {
                    let axis = options.axis;
                    let kept = filter_points(points.iter().cloned(), axis, domain);
                    if kept.len() < points.len() {
                        debug!(
                            "Component {}: {} of {} points dropped (non-finite or outside domain)",
                            index,
                            points.len() - kept.len(),
                            points.len()
                        );
                    }
                    if !kept.is_empty() {
                        out.components.push(MaterializedComponent {
                            index,
                            body: Materialized::Points {
                                origin: PointOrigin::Finite,
                                points: kept,
                                axis,
                            },
                        });
                    }
                }

                SetComponent::Sequence(spec) => {
                    let sampler = SequenceSampler::new(
                        &self.evaluator,
                        self.config.sampling(),
                        self.config.heuristics(),
                    );
                    match sampler.sample(spec, domain) {
                        Ok(samples) => {
                            if samples.analytic.is_none() && samples.members().next().is_none() {
                                if domain.is_none() {
                                    out.exclude(index, "no_finite_terms", "sequence produced no finite term");
                                }
                                continue;
                            }
                            debug!(
                                "Component {} sequence: {} terms, analytic={}",
                                index,
                                samples.terms.len(),
                                samples.analytic.is_some()
                            );
                            out.components.push(MaterializedComponent {
                                index,
                                body: Materialized::Sequence(samples),
                            });
                        }
                        Err(err) => out.exclude(index, err.reason_code(), err.to_string()),
                    }
                }

                SetComponent::CurveSurface(spec) => {
                    let sampler = CurveSampler::new(&self.evaluator, self.config.sampling());
                    match sampler.sample(spec) {
                        Ok(points) => {
                            let axis = spec.bound_axis();
                            let kept = filter_points(points.into_iter(), axis, domain);
                            if kept.is_empty() {
                                if domain.is_none() {
                                    out.exclude(index, "no_finite_samples", "curve produced no finite sample");
                                }
                                continue;
                            }
                            debug!("Component {} curve/surface: {} samples", index, kept.len());
                            out.components.push(MaterializedComponent {
                                index,
                                body: Materialized::Points {
                                    origin: PointOrigin::CurveSurface,
                                    points: kept,
                                    axis,
                                },
                            });
                        }
                        Err(err) => out.exclude(index, err.reason_code(), err.to_string()),
                    }
                }
            }
        }

        out
    }
}

fn filter_points(
    points: impl Iterator<Item = Point>,
    axis: usize,
    domain: Option<&BoundingDomain>,
) -> Vec<Point> {
    points
        .filter(|p| p.is_finite())
        .filter(|p| domain.map_or(true, |d| d.contains(p.coord(axis))))
        .collect()
}
