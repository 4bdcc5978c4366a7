//! Property-based tests for the engine configuration
//!
//! Invariants that should hold for ALL possible inputs:
//! - Validity: in-range values always validate
//! - Rejection: out-of-range values never validate
//! - Roundtrip: from_yaml(to_yaml(x)) == x
//! - Cross-section: cauchy_min_terms never exceeds max_sequence_terms

use proptest::prelude::*;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use std::io::Write;
use supremum_core::config::*;

fn preset_from(idx: u8) -> Preset {
    match idx % 3 {
        0 => Preset::Fast,
        1 => Preset::Balanced,
        _ => Preset::Thorough,
    }
}

// ============================================================================
// QuickCheck Tests (simpler, faster)
// ============================================================================

#[quickcheck]
fn qc_sampling_range_invariants(terms: usize, samples: usize, grid: usize) -> TestResult {
    if terms == 0 || terms > 10_000 || !(2..=100_000).contains(&samples) || !(2..=1_000).contains(&grid) {
        return TestResult::discard();
    }

    let mut config = SamplingConfig::from_preset(Preset::Balanced);
    config.max_sequence_terms = terms;
    config.max_curve_samples = samples;
    config.max_grid_resolution = grid;

    TestResult::from_bool(config.validate().is_ok())
}

#[quickcheck]
fn qc_diameter_thresholds(exact: usize, starts: usize) -> TestResult {
    if !(2..=10_000).contains(&exact) || !(1..=100).contains(&starts) {
        return TestResult::discard();
    }

    let mut config = DiameterConfig::from_preset(Preset::Fast);
    config.exact_threshold = exact;
    config.ascent_max_starts = starts;

    TestResult::from_bool(config.validate().is_ok())
}

#[quickcheck]
fn qc_every_preset_builds(preset_idx: u8) -> bool {
    let preset = preset_from(preset_idx);
    match EngineConfig::preset(preset).build() {
        Ok(config) => config.preset() == preset,
        Err(_) => false,
    }
}

#[quickcheck]
fn qc_tail_indices_must_increase(first: u64, second: u64) -> TestResult {
    if first == 0 || second == 0 {
        return TestResult::discard();
    }

    let config = HeuristicConfig::default().tail_indices(vec![first, second]);

    // Invariant: accepted exactly when strictly increasing
    TestResult::from_bool(config.validate().is_ok() == (first < second))
}

#[quickcheck]
fn qc_nan_tolerances_rejected(field: u8) -> bool {
    let mut config = HeuristicConfig::default();
    match field % 4 {
        0 => config.membership_tolerance = f64::NAN,
        1 => config.attainment_epsilon = f64::NAN,
        2 => config.irrational_tolerance = f64::NAN,
        _ => config.cauchy_threshold = f64::NAN,
    }
    config.validate().is_err()
}

#[quickcheck]
fn qc_partial_yaml_override_keeps_preset_fields(preset_idx: u8, exact: usize) -> TestResult {
    if !(2..=10_000).contains(&exact) {
        return TestResult::discard();
    }
    let preset = preset_from(preset_idx);
    let yaml = format!(
        "version: 1\npreset: {}\noverrides:\n  diameter:\n    exact_threshold: {}\n",
        preset, exact
    );

    let config = match EngineConfig::from_yaml_str(&yaml, "inline") {
        Ok(config) => config,
        Err(_) => return TestResult::failed(),
    };
    let expected = DiameterConfig::from_preset(preset).exact_threshold(exact);

    // Invariant: omitted fields come from the named preset, never another one
    TestResult::from_bool(config.diameter() == &expected)
}

// ============================================================================
// PropTest Tests (more powerful, better shrinking)
// ============================================================================

proptest! {
    #[test]
    fn prop_sequence_terms_out_of_range_rejected(terms in 10_001usize..100_000) {
        let result = EngineConfig::preset(Preset::Balanced)
            .sampling(|mut s| {
                s.max_sequence_terms = terms;
                s
            })
            .build();

        prop_assert!(result.is_err());
    }

    #[test]
    fn prop_cauchy_min_terms_bounded_by_sequence_terms(
        terms in 2usize..=500,
        min_terms in 2usize..=500,
    ) {
        let result = EngineConfig::preset(Preset::Fast)
            .sampling(|mut s| {
                s.max_sequence_terms = terms;
                s
            })
            .heuristics(|mut h| {
                h.cauchy_min_terms = min_terms;
                h
            })
            .build();

        // Invariant: the Cauchy test must be able to run on generated terms
        prop_assert_eq!(min_terms > terms, result.is_err());
    }

    #[test]
    fn prop_implicit_threshold_range(threshold in -10.0f64..20.0) {
        let mut config = SamplingConfig::default();
        config.implicit_threshold = threshold;

        let in_range = threshold > 0.0 && threshold <= 10.0;
        prop_assert_eq!(in_range, config.validate().is_ok());
    }

    #[test]
    fn prop_scan_budget_lower_bound(budget in 0usize..10) {
        let mut config = DiameterConfig::default();
        config.ascent_scan_budget = budget;

        prop_assert!(config.validate().is_err());
    }

    #[test]
    fn prop_yaml_roundtrip_preserves_values(
        preset_idx in 0u8..3,
        terms in 6usize..=1_000,
        refine in 2usize..=1_000,
        tolerance in 0.0f64..1e-3,
    ) {
        let builder = EngineConfig::preset(preset_from(preset_idx))
            .sampling(|mut s| {
                s.max_sequence_terms = terms;
                s
            })
            .diameter(|mut d| {
                d.refine_sample_size = refine;
                d
            })
            .heuristics(|h| h.membership_tolerance(tolerance));

        let yaml = builder.to_yaml().unwrap();
        let expected = builder.build().unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        let recovered = EngineConfig::from_yaml(file.path().to_str().unwrap()).unwrap();

        prop_assert_eq!(expected, recovered);
    }

    #[test]
    fn prop_describe_mentions_caps(terms in 1usize..=10_000) {
        let config = EngineConfig::preset(Preset::Thorough)
            .sampling(|mut s| {
                s.max_sequence_terms = terms;
                s
            })
            .heuristics(|mut h| {
                h.cauchy_min_terms = 2;
                h
            })
            .build()
            .unwrap();

        let description = config.describe();
        let expected = format!("terms={}", terms);
        prop_assert!(description.contains(&expected));
        prop_assert!(description.starts_with("thorough"));
    }
}

// ============================================================================
// YAML edge cases
// ============================================================================

#[test]
fn test_unsupported_version_rejected() {
    let yaml = "version: 2\npreset: balanced\n";
    let err = EngineConfig::from_yaml_str(yaml, "inline").unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedVersion { found: 2, .. }));
}

#[test]
fn test_unknown_preset_rejected() {
    let yaml = "version: 1\npreset: reckless\n";
    let err = EngineConfig::from_yaml_str(yaml, "inline").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownPreset(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");
    assert!(EngineConfig::from_yaml(path.to_str().unwrap()).is_err());
}
