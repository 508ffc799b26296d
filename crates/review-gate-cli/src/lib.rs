// crates/review-gate-cli/src/lib.rs
// ============================================================================
// Module: Review Gate CLI Library
// Description: Shared helpers for the Review Gate command-line interface.
// Purpose: Keep document loading and pipeline wiring testable outside main.
// Dependencies: review-gate-{audit, config, core, stages}, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This library houses the pieces of the `review-gate` binary that do real
//! work: turning a file on disk into a [`Document`](review_gate_core::Document)
//! and assembling the configured stages and audit sink into an orchestrator
//! run. The binary entry point (`src/main.rs`) only parses arguments and
//! renders results.
//!
//! Security posture: document and config inputs are untrusted; reads are
//! size-limited and fail closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod loader;
pub mod pipeline;
