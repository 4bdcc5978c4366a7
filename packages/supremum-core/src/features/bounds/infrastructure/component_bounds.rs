//! Per-component sup/inf on the bound axis

use super::divergence::{diverges, Direction};
use crate::config::HeuristicConfig;
use crate::features::bounds::domain::{ComponentBounds, Side};
use crate::features::materialize::{
    AnalyticProfile, AnalyticSide, Materialized, MaterializedComponent, SequenceSamples,
};
use crate::shared::models::BoundingDomain;

pub struct BoundsCalculator<'a> {
    heuristics: &'a HeuristicConfig,
    domain: Option<&'a BoundingDomain>,
}

impl<'a> BoundsCalculator<'a> {
    pub fn new(heuristics: &'a HeuristicConfig, domain: Option<&'a BoundingDomain>) -> Self {
        Self { heuristics, domain }
    }

    /// `None` when the component has no member left to bound
    pub fn bounds(&self, component: &MaterializedComponent) -> Option<ComponentBounds> {
        let (upper, lower) = match &component.body {
            Materialized::Interval(extent) => (
                endpoint(extent.end, extent.right_open),
                endpoint(extent.start, extent.left_open),
            ),
            Materialized::Points { points, axis, .. } => {
                let values = points.iter().map(|p| p.coord(*axis));
                let (lo, hi) = min_max(values)?;
                (Side::attained(hi), Side::attained(lo))
            }
            Materialized::Sequence(samples) => match &samples.analytic {
                Some(profile) => self.preset_sides(profile, samples)?,
                None => self.sampled_sides(samples)?,
            },
        };

        Some(ComponentBounds {
            index: component.index,
            upper,
            lower,
        })
    }

    fn preset_sides(&self, profile: &AnalyticProfile, samples: &SequenceSamples) -> Option<(Side, Side)> {
        let Some(domain) = self.domain else {
            return Some((profile.sup.into(), profile.inf.into()));
        };

        let sampled = min_max(samples.terms.iter().copied());

        let upper = match profile.sup {
            AnalyticSide::Unbounded if domain.max == f64::INFINITY => Side::Unbounded,
            side if samples.keeps_analytic(side, Some(domain)) => side.into(),
            _ => Side::attained(sampled?.1),
        };
        let lower = match profile.inf {
            AnalyticSide::Unbounded if domain.min == f64::NEG_INFINITY => Side::Unbounded,
            side if samples.keeps_analytic(side, Some(domain)) => side.into(),
            _ => Side::attained(sampled?.0),
        };
        Some((upper, lower))
    }

    fn sampled_sides(&self, samples: &SequenceSamples) -> Option<(Side, Side)> {
        let open_above = self.domain.map_or(true, |d| d.max == f64::INFINITY);
        let open_below = self.domain.map_or(true, |d| d.min == f64::NEG_INFINITY);

        let up = open_above && diverges(&samples.tail, Direction::Up, self.heuristics);
        let down = open_below && diverges(&samples.tail, Direction::Down, self.heuristics);
        let sampled = min_max(samples.members());

        let upper = if up {
            Side::Unbounded
        } else {
            Side::attained(sampled?.1)
        };
        let lower = if down {
            Side::Unbounded
        } else {
            Side::attained(sampled?.0)
        };
        Some((upper, lower))
    }
}

fn endpoint(value: f64, open: bool) -> Side {
    if value.is_infinite() {
        Side::Unbounded
    } else {
        Side::Bound {
            value,
            attained: !open,
        }
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::materialize::{IntervalExtent, PointOrigin};
    use crate::shared::models::{Point, SequencePreset};

    fn component(body: Materialized) -> MaterializedComponent {
        MaterializedComponent { index: 0, body }
    }

    fn custom(terms: Vec<f64>, tail: Vec<f64>) -> Materialized {
        Materialized::Sequence(SequenceSamples {
            preset: None,
            analytic: None,
            window: terms.clone(),
            terms,
            tail,
        })
    }

    fn preset(p: SequencePreset, terms: Vec<f64>) -> Materialized {
        Materialized::Sequence(SequenceSamples {
            preset: Some(p),
            analytic: Some(p.analytic(1)),
            terms,
            window: Vec::new(),
            tail: Vec::new(),
        })
    }

    #[test]
    fn test_interval_endpoints() {
        let heuristics = HeuristicConfig::default();
        let calc = BoundsCalculator::new(&heuristics, None);
        let b = calc
            .bounds(&component(Materialized::Interval(IntervalExtent::new(0.0, 1.0, false, true))))
            .unwrap();
        assert_eq!(
            b.upper,
            Side::Bound {
                value: 1.0,
                attained: false
            }
        );
        assert_eq!(b.lower, Side::attained(0.0));

        let b = calc
            .bounds(&component(Materialized::Interval(IntervalExtent::new(
                f64::NEG_INFINITY,
                2.0,
                true,
                false,
            ))))
            .unwrap();
        assert_eq!(b.lower, Side::Unbounded);
    }

    #[test]
    fn test_points_use_axis() {
        let heuristics = HeuristicConfig::default();
        let calc = BoundsCalculator::new(&heuristics, None);
        let body = Materialized::Points {
            origin: PointOrigin::Finite,
            points: vec![Point::new(vec![0.0, 5.0]), Point::new(vec![9.0, -1.0])],
            axis: 1,
        };
        let b = calc.bounds(&component(body)).unwrap();
        assert_eq!(b.upper, Side::attained(5.0));
        assert_eq!(b.lower, Side::attained(-1.0));
    }

    #[test]
    fn test_preset_uses_analytic_profile() {
        let heuristics = HeuristicConfig::default();
        let calc = BoundsCalculator::new(&heuristics, None);
        let b = calc
            .bounds(&component(preset(SequencePreset::Ratio, vec![0.5, 2.0 / 3.0])))
            .unwrap();
        assert_eq!(
            b.upper,
            Side::Bound {
                value: 1.0,
                attained: false
            }
        );
        assert_eq!(b.lower, Side::attained(0.5));
    }

    #[test]
    fn test_preset_clipped_by_domain_falls_back_to_samples() {
        let heuristics = HeuristicConfig::default();
        let domain = BoundingDomain::closed(0.0, 10.0);
        let calc = BoundsCalculator::new(&heuristics, Some(&domain));
        let terms: Vec<f64> = (1..=10).map(|n| n as f64).collect();
        let b = calc.bounds(&component(preset(SequencePreset::Natural, terms))).unwrap();
        assert_eq!(b.upper, Side::attained(10.0));
        assert_eq!(b.lower, Side::attained(1.0));
    }

    #[test]
    fn test_preset_unbounded_kept_when_domain_open_above() {
        let heuristics = HeuristicConfig::default();
        let domain = BoundingDomain {
            min: 0.0,
            max: f64::INFINITY,
            min_open: false,
            max_open: true,
        };
        let calc = BoundsCalculator::new(&heuristics, Some(&domain));
        let b = calc
            .bounds(&component(preset(SequencePreset::Natural, vec![1.0, 2.0])))
            .unwrap();
        assert_eq!(b.upper, Side::Unbounded);
    }

    #[test]
    fn test_custom_divergent_tail() {
        let heuristics = HeuristicConfig::default();
        let calc = BoundsCalculator::new(&heuristics, None);
        let b = calc
            .bounds(&component(custom(vec![1.0, 4.0, 9.0], vec![1e6, 1e8, 1e10])))
            .unwrap();
        assert_eq!(b.upper, Side::Unbounded);
        assert_eq!(b.lower, Side::attained(1.0));
    }

    #[test]
    fn test_custom_divergence_capped_by_domain() {
        let heuristics = HeuristicConfig::default();
        let domain = BoundingDomain::closed(0.0, 1e6);
        let calc = BoundsCalculator::new(&heuristics, Some(&domain));
        let b = calc
            .bounds(&component(custom(vec![1.0, 4.0, 9.0], vec![1e6])))
            .unwrap();
        assert_eq!(b.upper, Side::attained(1e6));
    }

    #[test]
    fn test_custom_sample_max_over_window_and_tail() {
        let heuristics = HeuristicConfig::default();
        let calc = BoundsCalculator::new(&heuristics, None);
        let b = calc
            .bounds(&component(custom(vec![0.1, 0.2], vec![0.9, 0.99, 0.999])))
            .unwrap();
        assert_eq!(b.upper, Side::attained(0.999));
        assert_eq!(b.lower, Side::attained(0.1));
    }
}
