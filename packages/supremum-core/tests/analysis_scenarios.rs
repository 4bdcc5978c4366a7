//! End-to-end analysis scenarios
//!
//! Each test builds a small union of components and checks the full
//! result record: bounds, attainment, diameter, completeness.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use supremum_core::{
    AnalysisOptions, AnalysisResult, BoundingDomain, CurveSurfaceSpec, DiameterMethod,
    ExtendedReal, IndexRange, Point, SequencePreset, SequenceSource, SequenceSpec, SetComponent,
    Universe,
};

// =============================================================================
// Intervals
// =============================================================================

#[test]
fn test_closed_unit_interval() {
    let r = run(&[SetComponent::closed(0.0, 1.0)]);
    assert_eq!(r.sup, finite(1.0));
    assert_eq!(r.max, Some(1.0));
    assert_eq!(r.inf, finite(0.0));
    assert_eq!(r.min, Some(0.0));
    assert_eq!(r.diameter, finite(1.0));
    assert_eq!(r.diameter_method, Some(DiameterMethod::Exact));
    assert!(r.bounded_above && r.bounded_below);
    assert!(r.is_complete_in_space);
    assert!(r.is_compact);
}

#[test]
fn test_half_open_interval_has_no_max() {
    let r = run(&[SetComponent::interval(0.0, 1.0, false, true)]);
    assert_eq!(r.sup, finite(1.0));
    assert_eq!(r.max, None);
    assert_eq!(r.min, Some(0.0));
    assert!(!r.is_complete_in_space);
    assert!(!r.is_compact);
}

#[test]
fn test_open_interval_closed_by_points() {
    let r = run(&[SetComponent::open(0.0, 1.0), SetComponent::scalars(&[0.0, 1.0])]);
    assert_eq!(r.max, Some(1.0));
    assert_eq!(r.min, Some(0.0));
    assert!(r.is_compact);
}

#[test]
fn test_ray_is_unbounded() {
    let r = run(&[SetComponent::interval(f64::NEG_INFINITY, 2.0, true, false)]);
    assert_eq!(r.inf, Some(ExtendedReal::NegInfinity));
    assert_eq!(r.min, None);
    assert!(!r.bounded_below);
    assert_eq!(r.max, Some(2.0));
    assert_eq!(r.diameter, Some(ExtendedReal::PosInfinity));
    assert_eq!(r.diameter_method, Some(DiameterMethod::Unbounded));
    assert!(!r.is_compact);
}

// =============================================================================
// Rational universe
// =============================================================================

#[test]
fn test_rational_universe_sqrt2_gap() {
    let sqrt2 = std::f64::consts::SQRT_2;
    let r = run_with(
        &[SetComponent::interval(f64::NEG_INFINITY, sqrt2, true, true)],
        AnalysisOptions::rational(),
    );
    assert!(r.completeness_gap);
    assert_eq!(r.sup, None);
    assert_eq!(r.max, None);
    assert!(approx(r.theoretical_sup, 1.414_213_56));
    assert!(!r.is_complete_in_space);
    assert_eq!(r.universe, Universe::Rational);
}

#[test]
fn test_rational_universe_without_gap() {
    let r = run_with(&[SetComponent::closed(0.0, 1.5)], AnalysisOptions::rational());
    assert!(!r.completeness_gap);
    assert_eq!(r.sup, finite(1.5));
    assert_eq!(r.theoretical_sup, Some(1.5));
}

#[test]
fn test_real_universe_keeps_irrational_sup() {
    let sqrt2 = std::f64::consts::SQRT_2;
    let r = run(&[SetComponent::interval(0.0, sqrt2, false, true)]);
    assert!(!r.completeness_gap);
    assert_eq!(r.sup, finite(sqrt2));
}

#[test]
fn test_rational_gap_from_sequence_preset() {
    // Truncations of √2 approach √2 from below
    let r = run_with(
        &[SetComponent::preset(SequencePreset::Sqrt2Truncations)],
        AnalysisOptions::rational(),
    );
    assert!(r.completeness_gap);
    assert_eq!(r.sup, None);
    assert_eq!(r.inf, finite(1.4));
    assert_eq!(r.min, Some(1.4));
}

// =============================================================================
// Sequences
// =============================================================================

#[test]
fn test_reciprocal_preset() {
    let r = run(&[SetComponent::preset(SequencePreset::Reciprocal)]);
    assert_eq!(r.sup, finite(1.0));
    assert_eq!(r.max, Some(1.0));
    assert_eq!(r.inf, finite(0.0));
    assert_eq!(r.min, None);
    assert_eq!(r.is_cauchy, Some(true));
    assert_eq!(r.converges_to, Some(0.0));
    assert!(!r.is_complete_in_space);
    assert_eq!(r.diameter, finite(1.0));
}

#[test]
fn test_euler_preset_sup_is_e_not_attained() {
    let r = run(&[SetComponent::preset(SequencePreset::Euler)]);
    assert_eq!(r.sup, finite(std::f64::consts::E));
    assert_eq!(r.max, None);
    assert_eq!(r.min, Some(2.0));
}

#[test]
fn test_preset_start_index_shifts_profile() {
    let r = run(&[SetComponent::Sequence(SequenceSpec {
        source: SequenceSource::Preset(SequencePreset::Reciprocal),
        index_range: IndexRange::new(4, 50),
    })]);
    assert_eq!(r.max, Some(0.25));
}

#[test]
fn test_custom_divergent_sequence() {
    let r = run(&[SetComponent::custom_sequence("n^2")]);
    assert_eq!(r.sup, Some(ExtendedReal::PosInfinity));
    assert!(!r.bounded_above);
    assert_eq!(r.min, Some(1.0));
    assert_eq!(r.is_cauchy, Some(false));
}

#[test]
fn test_custom_slow_divergence_detected() {
    let r = run(&[SetComponent::custom_sequence("log(n)")]);
    assert!(!r.bounded_above);
}

#[test]
fn test_custom_convergent_sequence() {
    let r = run(&[SetComponent::custom_sequence("1 - 1/n")]);
    assert!(r.bounded_above && r.bounded_below);
    assert_eq!(r.min, Some(0.0));
    assert!(r.sup_value().unwrap() < 1.0);
    assert_eq!(r.is_cauchy, Some(true));
}

#[test]
fn test_unsafe_custom_formula_excluded() {
    let r = run(&[
        SetComponent::closed(0.0, 1.0),
        SetComponent::custom_sequence("process.exit(1)"),
    ]);
    assert_eq!(r.sup, finite(1.0));
    assert_eq!(r.excluded.len(), 1);
    assert_eq!(r.excluded[0].index, 1);
    assert_eq!(r.excluded[0].reason, "unsafe_expression");
}

#[test]
fn test_two_sequences_report_no_single_limit() {
    let r = run(&[
        SetComponent::preset(SequencePreset::Reciprocal),
        SetComponent::preset(SequencePreset::GeometricHalf),
    ]);
    assert_eq!(r.is_cauchy, Some(true));
    assert_eq!(r.converges_to, None);
    assert_eq!(r.sequences.len(), 2);
}

// =============================================================================
// Empty set, single point, union law
// =============================================================================

#[test]
fn test_empty_set() {
    let r = run(&[]);
    assert_eq!(r, AnalysisResult::empty(Universe::Real));
    assert!(r.is_empty);
    assert!(r.bounded_above && r.bounded_below);
    assert!(r.is_compact);
}

#[test]
fn test_single_point() {
    let p = Point::new(vec![2.0, -3.0]);
    let r = run(&[SetComponent::Finite {
        points: vec![p.clone()],
    }]);
    assert_eq!(r.diameter, finite(0.0));
    assert_eq!(r.diameter_witness, Some((p.clone(), p)));
    assert_eq!(r.diameter_method, Some(DiameterMethod::Trivial));
    assert_eq!(r.sup, finite(2.0));
    assert_eq!(r.max, Some(2.0));
}

#[test]
fn test_union_law() {
    let a = vec![SetComponent::interval(-2.0, 3.0, true, false)];
    let b = vec![
        SetComponent::scalars(&[5.0, -1.0]),
        SetComponent::preset(SequencePreset::Ratio),
    ];
    let ra = run(&a);
    let rb = run(&b);
    let union: Vec<SetComponent> = a.iter().chain(b.iter()).cloned().collect();
    let ru = run(&union);

    let sup = ra.sup_value().unwrap().max(rb.sup_value().unwrap());
    let inf = ra.inf_value().unwrap().min(rb.inf_value().unwrap());
    assert_eq!(ru.sup, finite(sup));
    assert_eq!(ru.inf, finite(inf));
    assert_eq!(ru.max, Some(5.0));
    assert_eq!(ru.min, None);
}

// =============================================================================
// Bounding domain, curves
// =============================================================================

#[test]
fn test_bounding_domain_clips_ray() {
    let options = AnalysisOptions::default().with_domain(BoundingDomain::closed(-1.0, 1.0));
    let r = run_with(&[SetComponent::interval(f64::NEG_INFINITY, 0.5, true, true)], options);
    assert_eq!(r.inf, finite(-1.0));
    assert_eq!(r.min, Some(-1.0));
    assert_eq!(r.sup, finite(0.5));
    assert_eq!(r.max, None);
    assert_eq!(r.diameter, finite(1.5));
}

#[test]
fn test_bounding_domain_caps_natural_numbers() {
    let options = AnalysisOptions::default().with_domain(BoundingDomain::closed(0.0, 10.0));
    let r = run_with(&[SetComponent::preset(SequencePreset::Natural)], options);
    assert!(r.bounded_above);
    assert_eq!(r.max, Some(10.0));
    assert_eq!(r.min, Some(1.0));
}

#[test]
fn test_domain_excludes_unreached_analytic_points() {
    // 1/n never enters [-1, 0], so its limit 0 is not a point of S ∩ D
    let options = AnalysisOptions::default().with_domain(BoundingDomain::closed(-1.0, 0.0));
    let r = run_with(
        &[
            SetComponent::closed(-1.0, -0.5),
            SetComponent::preset(SequencePreset::Reciprocal),
        ],
        options,
    );
    assert_eq!(r.sup, finite(-0.5));
    assert_eq!(r.inf, finite(-1.0));
    assert_eq!(r.diameter, finite(0.5));
    assert_eq!(
        r.diameter_witness,
        Some((Point::scalar(-1.0), Point::scalar(-0.5)))
    );
}

#[test]
fn test_domain_beyond_generated_terms_is_not_empty() {
    let options = AnalysisOptions::default().with_domain(BoundingDomain::closed(0.0, 0.001));
    let r = run_with(&[SetComponent::preset(SequencePreset::Reciprocal)], options);
    assert!(!r.is_empty);
    assert_eq!(r.sup, finite(0.001));
    assert_eq!(r.max, Some(0.001));
    assert_eq!(r.inf, finite(0.0));
    assert_eq!(r.min, None);
    assert!(approx(r.diameter_value(), 0.001));
    assert!(!r.is_complete_in_space);
}

#[test]
fn test_parabola_bounds_on_value_axis() {
    let r = run(&[SetComponent::CurveSurface(CurveSurfaceSpec::explicit("x^2", -1.0, 1.0, 201))]);
    assert_eq!(r.sup, finite(1.0));
    assert!(approx(r.inf_value(), 0.0));
    assert_eq!(r.diameter_method, Some(DiameterMethod::MultiStartAscent));
    assert!(approx(r.diameter_value(), 2.0));
}

#[test]
fn test_unit_circle_diameter() {
    let r = run(&[circle(401)]);
    assert!(approx(r.diameter_value(), 2.0));
    assert!(approx(r.max, 1.0));
    assert!(approx(r.min, -1.0));
}

#[test]
fn test_planar_points_bound_axis() {
    let options = AnalysisOptions {
        axis: 1,
        ..AnalysisOptions::default()
    };
    let r = run_with(&[points_2d(&[(0.0, 3.0), (4.0, 0.0)])], options);
    assert_eq!(r.sup, finite(3.0));
    assert_eq!(r.inf, finite(0.0));
    assert_eq!(r.diameter, finite(5.0));
}

#[test]
fn test_result_json_shape() {
    let r = run(&[SetComponent::interval(0.0, f64::INFINITY, false, true)]);
    let json: serde_json::Value = serde_json::from_str(&r.to_json().unwrap()).unwrap();
    assert_eq!(json["sup"], "inf");
    assert_eq!(json["diameter"], "inf");
    assert_eq!(json["min"], 0.0);
    assert!(json["max"].is_null());
    assert_eq!(json["universe"], "R");
}

// =============================================================================
// Domain-clipped unions on the line
// =============================================================================

proptest! {
    #[test]
    fn prop_clipped_line_diameter_is_sup_minus_inf(
        min in -2.0f64..1.0,
        width in 0.0001f64..3.0,
    ) {
        let options = AnalysisOptions::default().with_domain(BoundingDomain::closed(min, min + width));
        let r = run_with(
            &[
                SetComponent::closed(-1.0, -0.5),
                SetComponent::preset(SequencePreset::Reciprocal),
                SetComponent::preset(SequencePreset::Ratio),
            ],
            options,
        );
        prop_assume!(!r.is_empty);

        let spread = r.sup_value().unwrap() - r.inf_value().unwrap();
        let diameter = r.diameter_value().unwrap();
        prop_assert!((diameter - spread).abs() <= 1e-9, "diameter {} vs spread {}", diameter, spread);
    }
}
