// crates/review-gate-core/src/core/mod.rs
// ============================================================================
// Module: Review Gate Core Types
// Description: Canonical document, stage result, policy, and run-state types.
// Purpose: Provide stable, serializable types for the review pipeline and audit trail.
// Dependencies: serde, serde_jcs, sha2, thiserror, uuid
// ============================================================================

//! ## Overview
//! Review Gate core types define documents, stage results, policies, decision
//! outcomes, and the per-request run state. These types are the canonical
//! source of truth for audit records and any derived API surface.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod audit;
pub mod document;
pub mod hashing;
pub mod identifiers;
pub mod policy;
pub mod results;
pub mod risk;
pub mod state;
pub mod value;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::AuditRecord;
pub use audit::DecisionAuditRecord;
pub use audit::StateSnapshotRecord;
pub use document::Document;
pub use hashing::DEFAULT_HASH_ALGORITHM;
pub use hashing::HashAlgorithm;
pub use hashing::HashDigest;
pub use identifiers::DocumentId;
pub use identifiers::PolicyId;
pub use identifiers::RequestId;
pub use policy::Policy;
pub use policy::PolicyValidationError;
pub use results::AnalysisResult;
pub use results::DecisionOutcome;
pub use results::DecisionStatus;
pub use results::ExtractionResult;
pub use results::VerificationResult;
pub use risk::RiskLabel;
pub use risk::RiskSeverity;
pub use state::RunState;
pub use state::RunStateError;
pub use state::StageName;
pub use value::FieldMap;
pub use value::FieldValue;
