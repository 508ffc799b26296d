// crates/review-gate-core/src/runtime/mod.rs
// ============================================================================
// Module: Review Gate Runtime
// Description: Verification scoring, policy evaluation, and orchestration.
// Purpose: Execute the review pipeline against injected stages and sinks.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime modules implement the scorer, the policy engine, and the
//! orchestrator that drives them. All callers go through
//! [`Orchestrator::run`] so that ordering and audit emission stay uniform.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod audit;
pub mod orchestrator;
pub mod policy;
pub mod scorer;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::InMemoryAuditSink;
pub use orchestrator::Orchestrator;
pub use orchestrator::OrchestratorError;
pub use policy::ControlDecision;
pub use policy::PolicyEngine;
pub use scorer::ScoringVerifier;
pub use scorer::score;
