// crates/review-gate-stages/src/lib.rs
// ============================================================================
// Module: Review Gate Stages
// Description: Built-in heuristic stages and fallback adapters.
// Purpose: Provide in-process stage implementations for Review Gate core.
// Dependencies: review-gate-core
// ============================================================================

//! ## Overview
//! This crate ships the heuristic extraction and analysis stages used by the
//! command line, plus adapters that turn a failing stage into a degraded
//! result. The core never suppresses stage errors; callers that want
//! degraded output opt in by wrapping a stage in [`FallbackExtraction`] or
//! [`FallbackAnalysis`].
//! Invariants:
//! - Heuristic stages are pure functions of their input and configuration.
//! - Fallback output always fails closed once scored.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod analyst;
pub mod extractor;
pub mod fallback;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use analyst::DEFAULT_LONG_DOCUMENT_CHARS;
pub use analyst::HeuristicAnalyst;
pub use analyst::HeuristicAnalystConfig;
pub use extractor::HeuristicExtractor;
pub use fallback::FallbackAnalysis;
pub use fallback::FallbackExtraction;
