// crates/review-gate-config/src/lib.rs
// ============================================================================
// Module: Review Gate Config Library
// Description: Canonical config model and validation.
// Purpose: Single source of truth for review-gate.toml semantics.
// Dependencies: review-gate-core, serde, serde_json, toml
// ============================================================================

//! ## Overview
//! `review-gate-config` defines the configuration model for the Review Gate
//! command line: which audit sink to use, the default policy, and heuristic
//! stage settings. It also loads standalone policy files. Loading enforces size, path, and encoding limits, and
//! validation fails closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod policy;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use policy::load_policy;
