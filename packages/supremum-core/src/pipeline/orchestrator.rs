//! Analysis orchestrator
//!
//! Runs the feature stages in order and assembles one immutable
//! [`AnalysisResult`] per call. The engine itself holds only validated,
//! read-only configuration.

use crate::config::ValidatedConfig;
use crate::features::bounds::{fold_union, BoundsCalculator, ComponentBounds};
use crate::features::completeness::CompletenessAnalyzer;
use crate::features::diameter::{DiameterEngine, PointCloud};
use crate::features::materialize::Materializer;
use crate::shared::models::{
    euclidean, AnalysisOptions, AnalysisResult, DistanceFn, ExtendedReal, SetComponent,
};
use tracing::{debug, info, warn};

/// Set analysis engine
#[derive(Clone)]
pub struct AnalysisEngine {
    config: ValidatedConfig,
    distance: DistanceFn,
}

impl std::fmt::Debug for AnalysisEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AnalysisEngine {
    pub fn new(config: ValidatedConfig) -> Self {
        Self {
            config,
            distance: euclidean,
        }
    }

    /// Replace the metric used by the diameter stage
    pub fn with_distance(mut self, distance: DistanceFn) -> Self {
        self.distance = distance;
        self
    }

    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    /// Analyse the union of `components`
    ///
    /// Never fails: components that cannot be materialized are listed in
    /// `excluded` and the rest are analysed.
    pub fn analyze(&self, components: &[SetComponent], options: &AnalysisOptions) -> AnalysisResult {
        let heuristics = self.config.heuristics();
        let domain = options.bounding_domain.as_ref();

        // L1: Materialize
        let materialization = Materializer::new(&self.config).materialize(components, options);
        for excluded in &materialization.excluded {
            warn!(
                "Component {} excluded ({}): {}",
                excluded.index, excluded.reason, excluded.detail
            );
        }

        // L2: Bounds
        let calculator = BoundsCalculator::new(heuristics, domain);
        let per_component: Vec<ComponentBounds> = materialization
            .components
            .iter()
            .filter_map(|c| calculator.bounds(c))
            .collect();
        let bounds = fold_union(&per_component, heuristics.attainment_epsilon);

        if bounds.is_empty {
            debug!("Analysis of {} components: empty set", components.len());
            return AnalysisResult {
                excluded: materialization.excluded,
                ..AnalysisResult::empty(options.universe)
            };
        }

        // L3: Diameter
        let cloud = PointCloud::from_materialization(
            &materialization,
            domain,
            !bounds.bounded_above || !bounds.bounded_below,
        );
        debug!(
            "Diameter input: {} points (continuous={})",
            cloud.points.len(),
            cloud.continuous
        );
        let diameter = DiameterEngine::new(self.config.diameter(), self.distance).compute(&cloud);

        // L4: Completeness
        let completeness =
            CompletenessAnalyzer::new(heuristics).analyze(&materialization, &bounds, options.universe);

        // Assemble
        let theoretical_sup = bounds.sup.and_then(ExtendedReal::finite);
        let theoretical_inf = bounds.inf.and_then(ExtendedReal::finite);
        let (sup, max) = if completeness.sup_gap {
            (None, None)
        } else {
            (bounds.sup, bounds.max)
        };
        let (inf, min) = if completeness.inf_gap {
            (None, None)
        } else {
            (bounds.inf, bounds.min)
        };

        let is_complete = completeness.is_complete;
        let result = AnalysisResult {
            universe: options.universe,
            is_empty: false,
            sup,
            inf,
            max,
            min,
            bounded_above: bounds.bounded_above,
            bounded_below: bounds.bounded_below,
            diameter: diameter.as_ref().map(|d| d.value),
            diameter_method: diameter.as_ref().map(|d| d.method),
            diameter_witness: diameter.and_then(|d| d.witness),
            is_cauchy: completeness.is_cauchy,
            converges_to: completeness.converges_to,
            is_complete_in_space: is_complete,
            is_compact: bounds.bounded_above && bounds.bounded_below && is_complete,
            completeness_gap: completeness.completeness_gap(),
            theoretical_sup,
            theoretical_inf,
            sequences: completeness.sequences,
            excluded: materialization.excluded,
        };

        info!(
            "Analyzed {} components: sup={:?} inf={:?} diameter={:?} compact={}",
            components.len(),
            result.sup,
            result.inf,
            result.diameter,
            result.is_compact
        );

        result
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new(ValidatedConfig::default())
    }
}

/// Analyse with the default (balanced) configuration
pub fn analyze(components: &[SetComponent], options: &AnalysisOptions) -> AnalysisResult {
    AnalysisEngine::default().analyze(components, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EngineConfig, Preset};
    use crate::shared::models::{DiameterMethod, Point, SequencePreset, Universe};

    #[test]
    fn test_closed_unit_interval() {
        let r = analyze(&[SetComponent::closed(0.0, 1.0)], &AnalysisOptions::default());
        assert_eq!(r.sup, Some(ExtendedReal::Finite(1.0)));
        assert_eq!(r.max, Some(1.0));
        assert_eq!(r.min, Some(0.0));
        assert_eq!(r.diameter, Some(ExtendedReal::Finite(1.0)));
        assert!(r.is_compact);
    }

    #[test]
    fn test_empty_input() {
        let r = analyze(&[], &AnalysisOptions::default());
        assert_eq!(r, AnalysisResult::empty(Universe::Real));
    }

    #[test]
    fn test_only_excluded_components_is_empty_with_reasons() {
        let r = analyze(&[SetComponent::custom_sequence("1 +")], &AnalysisOptions::default());
        assert!(r.is_empty);
        assert_eq!(r.excluded.len(), 1);
        assert_eq!(r.excluded[0].reason, "parse_error");
    }

    #[test]
    fn test_unbounded_diameter() {
        let r = analyze(
            &[SetComponent::preset(SequencePreset::Natural)],
            &AnalysisOptions::default(),
        );
        assert_eq!(r.sup, Some(ExtendedReal::PosInfinity));
        assert_eq!(r.diameter, Some(ExtendedReal::PosInfinity));
        assert_eq!(r.diameter_method, Some(DiameterMethod::Unbounded));
        assert!(!r.is_compact);
    }

    #[test]
    fn test_custom_metric_injected() {
        fn chebyshev(a: &Point, b: &Point) -> f64 {
            (0..a.dim().max(b.dim()))
                .map(|i| (a.coord(i) - b.coord(i)).abs())
                .fold(0.0, f64::max)
        }
        let engine = AnalysisEngine::default().with_distance(chebyshev);
        let r = engine.analyze(
            &[SetComponent::Finite {
                points: vec![Point::new(vec![0.0, 0.0]), Point::new(vec![3.0, 4.0])],
            }],
            &AnalysisOptions::default(),
        );
        assert_eq!(r.diameter, Some(ExtendedReal::Finite(4.0)));
    }

    #[test]
    fn test_engine_is_deterministic() {
        let engine = AnalysisEngine::new(EngineConfig::preset(Preset::Fast).build().unwrap());
        let components = [
            SetComponent::open(-1.0, 0.5),
            SetComponent::preset(SequencePreset::AlternatingReciprocal),
            SetComponent::custom_sequence("sin(n)/n"),
        ];
        let a = engine.analyze(&components, &AnalysisOptions::default());
        let b = engine.analyze(&components, &AnalysisOptions::default());
        assert_eq!(a, b);
    }
}
