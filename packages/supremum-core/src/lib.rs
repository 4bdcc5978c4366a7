/*
 * Supremum Core - Set Analysis & Diameter Engine
 *
 * Feature-First Architecture:
 * - shared/      : Common models (Point, SetComponent, AnalysisResult)
 * - features/    : Vertical slices (formula → materialize → bounds → diameter → completeness)
 * - pipeline/    : Orchestration (one immutable AnalysisResult per call)
 * - api/         : Boundary decoding + validation (JSON requests)
 *
 * Determinism:
 * - Sampling is index-based, no randomness anywhere
 * - No state survives between analyze() calls
 */

// Crate-level lint configuration
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::should_implement_trait)] // from_str naming intentional
#![allow(clippy::needless_range_loop)] // Range loop for pair indexing

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models (points, components, results)
pub mod shared;

/// Feature modules (formula, materialize, bounds, diameter, completeness)
pub mod features;

/// Analysis orchestration
pub mod pipeline;

/// Configuration system (presets, overrides, YAML)
pub mod config;

/// Boundary: request decoding and validation
pub mod api;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use api::{
    analyze_json, analyze_request_json, validate_request, AnalysisRequest, ValidationError,
};
pub use config::{EngineConfig, Preset, ValidatedConfig};
pub use errors::{EngineError, Result};
pub use pipeline::{analyze, AnalysisEngine};
pub use shared::models::{
    AnalysisOptions, AnalysisResult, BoundingDomain, CurveKind, CurveSurfaceSpec,
    DiameterMethod, ExtendedReal, IndexRange, Point, SequencePreset, SequenceSource,
    SequenceSpec, SetComponent, Universe,
};
