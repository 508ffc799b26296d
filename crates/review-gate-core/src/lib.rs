// crates/review-gate-core/src/lib.rs
// ============================================================================
// Module: Review Gate Core Library
// Description: Public API surface for the Review Gate core.
// Purpose: Expose core types, interfaces, and runtime helpers.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Review Gate core threads a single document through ordered extraction,
//! analysis, and verification stages, evaluates a deterministic policy
//! against the verification result, and records every stage transition to an
//! audit sink. Stage implementations and audit storage are supplied by the
//! caller through explicit interfaces.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use interfaces::AnalysisStage;
pub use interfaces::AuditError;
pub use interfaces::AuditSink;
pub use interfaces::ExtractionStage;
pub use interfaces::StageError;
pub use interfaces::VerificationStage;
pub use runtime::ControlDecision;
pub use runtime::InMemoryAuditSink;
pub use runtime::Orchestrator;
pub use runtime::OrchestratorError;
pub use runtime::PolicyEngine;
pub use runtime::ScoringVerifier;
pub use runtime::score;
