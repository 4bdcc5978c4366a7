//! Algorithm selection and point-cloud assembly

use super::ascent::multi_start_ascent;
use super::exact::exact_diameter;
use super::sampled::sampled_refine;
use crate::config::DiameterConfig;
use crate::features::diameter::domain::{DiameterResult, PointCloud};
use crate::features::materialize::{Materialization, Materialized};
use crate::shared::models::{BoundingDomain, DiameterMethod, DistanceFn, ExtendedReal, Point};
use tracing::debug;

impl PointCloud {
    /// Collect the closure points of every materialized component
    ///
    /// Intervals contribute their endpoints, catalogued sequences their
    /// generated terms plus the finite analytic extremes that still bound
    /// what survived the domain filter.
    pub fn from_materialization(
        materialization: &Materialization,
        domain: Option<&BoundingDomain>,
        unbounded: bool,
    ) -> Self {
        let mut points = Vec::new();

        for component in &materialization.components {
            match &component.body {
                Materialized::Interval(extent) => {
                    points.push(Point::scalar(extent.start));
                    points.push(Point::scalar(extent.end));
                }
                Materialized::Points { points: pts, .. } => points.extend(pts.iter().cloned()),
                Materialized::Sequence(samples) => match &samples.analytic {
                    Some(profile) => {
                        points.extend(samples.terms.iter().map(|v| Point::scalar(*v)));
                        let closure = [profile.sup, profile.inf]
                            .into_iter()
                            .filter(|side| samples.keeps_analytic(*side, domain))
                            .filter_map(|side| side.value());
                        points.extend(closure.map(Point::scalar));
                    }
                    None => points.extend(samples.members().map(Point::scalar)),
                },
            }
        }

        // Closure points of unbounded intervals are not finite
        points.retain(Point::is_finite);

        Self {
            points,
            unbounded,
            continuous: materialization.has_curve_surface(),
        }
    }
}

/// Picks exact / sampled-refine / multi-start ascent by cloud size and kind
pub struct DiameterEngine<'a> {
    config: &'a DiameterConfig,
    distance: DistanceFn,
}

impl<'a> DiameterEngine<'a> {
    pub fn new(config: &'a DiameterConfig, distance: DistanceFn) -> Self {
        Self { config, distance }
    }

    /// `None` for an empty cloud
    pub fn compute(&self, cloud: &PointCloud) -> Option<DiameterResult> {
        if cloud.unbounded {
            return Some(DiameterResult::unbounded());
        }

        let points = &cloud.points;
        match points.len() {
            0 => None,
            1 => Some(DiameterResult {
                value: ExtendedReal::Finite(0.0),
                witness: Some((points[0].clone(), points[0].clone())),
                method: DiameterMethod::Trivial,
            }),
            n if n < self.config.exact_threshold => Some(DiameterResult::from_pair(
                points,
                exact_diameter(points, self.distance),
                DiameterMethod::Exact,
            )),
            n if cloud.continuous => {
                debug!("Diameter: multi-start ascent over {} points", n);
                Some(DiameterResult::from_pair(
                    points,
                    multi_start_ascent(points, self.config, self.distance),
                    DiameterMethod::MultiStartAscent,
                ))
            }
            n => {
                debug!("Diameter: sampled refine over {} points", n);
                Some(DiameterResult::from_pair(
                    points,
                    sampled_refine(points, self.config.refine_sample_size, self.distance),
                    DiameterMethod::SampledRefine,
                ))
            }
        }
    }
}
