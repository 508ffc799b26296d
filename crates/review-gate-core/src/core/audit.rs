// crates/review-gate-core/src/core/audit.rs
// ============================================================================
// Module: Review Gate Audit Records
// Description: Record shapes emitted to audit sinks for snapshots and decisions.
// Purpose: Give every sink the same minimal, stable record layout.
// Dependencies: crate::core::{hashing, identifiers, results, state, value}, serde
// ============================================================================

//! ## Overview
//! Audit sinks persist one record per stage snapshot and one per final
//! decision. Records carry presence flags and summary fields rather than full
//! stage payloads, so document text and findings do not leak into logs.
//! Decision records include a canonical hash of the full decision outcome.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::hashing::HashAlgorithm;
use crate::core::hashing::HashDigest;
use crate::core::hashing::HashError;
use crate::core::hashing::hash_canonical_json;
use crate::core::identifiers::DocumentId;
use crate::core::identifiers::PolicyId;
use crate::core::identifiers::RequestId;
use crate::core::results::DecisionOutcome;
use crate::core::results::DecisionStatus;
use crate::core::state::RunState;
use crate::core::state::StageName;
use crate::core::value::FieldMap;

// ============================================================================
// SECTION: Stage Snapshots
// ============================================================================

/// Snapshot of run-state progress after a stage transition.
///
/// # Invariants
/// - Presence flags mirror the run state at the moment of the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshotRecord {
    /// Request identifier.
    pub request_id: RequestId,
    /// Document identifier.
    pub document_id: DocumentId,
    /// Most recently filled slot.
    pub stage: Option<StageName>,
    /// Extraction slot is filled.
    pub has_extraction: bool,
    /// Analysis slot is filled.
    pub has_analysis: bool,
    /// Verification slot is filled.
    pub has_verification: bool,
    /// Decision slot is filled.
    pub has_decision: bool,
    /// Stage metadata accumulated so far.
    pub context: FieldMap,
}

impl StateSnapshotRecord {
    /// Builds a snapshot record from the current run state.
    #[must_use]
    pub fn from_state(state: &RunState) -> Self {
        Self {
            request_id: state.request_id().clone(),
            document_id: state.document().id.clone(),
            stage: state.latest_stage(),
            has_extraction: state.has(StageName::Extraction),
            has_analysis: state.has(StageName::Analysis),
            has_verification: state.has(StageName::Verification),
            has_decision: state.has(StageName::Decision),
            context: state.context().clone(),
        }
    }
}

// ============================================================================
// SECTION: Decision Records
// ============================================================================

/// Final decision record.
///
/// # Invariants
/// - `decision_hash` is the canonical JSON hash of the full [`DecisionOutcome`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionAuditRecord {
    /// Request identifier.
    pub request_id: RequestId,
    /// Document identifier.
    pub document_id: DocumentId,
    /// Policy identifier.
    pub policy_id: PolicyId,
    /// Decision status.
    pub status: DecisionStatus,
    /// Decision reasons in rule order.
    pub reasons: Vec<String>,
    /// Verification confidence the decision was based on.
    pub verification_confidence: f64,
    /// Verification issue codes.
    pub verification_issues: Vec<String>,
    /// Canonical hash of the decision outcome.
    pub decision_hash: HashDigest,
}

impl DecisionAuditRecord {
    /// Builds a decision record and hashes the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] when the outcome cannot be canonicalized.
    pub fn from_outcome(
        request_id: &RequestId,
        decision: &DecisionOutcome,
        algorithm: HashAlgorithm,
    ) -> Result<Self, HashError> {
        let decision_hash = hash_canonical_json(algorithm, decision)?;
        Ok(Self {
            request_id: request_id.clone(),
            document_id: decision.document_id.clone(),
            policy_id: decision.policy_id.clone(),
            status: decision.status,
            reasons: decision.reasons.clone(),
            verification_confidence: decision.verification.confidence,
            verification_issues: decision.verification.issues.clone(),
            decision_hash,
        })
    }
}

// ============================================================================
// SECTION: Audit Record Envelope
// ============================================================================

/// Audit record variants emitted by the orchestrator.
///
/// # Invariants
/// - Variants are stable for serialization; the tag is the `event` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AuditRecord {
    /// Stage transition snapshot.
    StageSnapshot(StateSnapshotRecord),
    /// Final decision.
    Decision(DecisionAuditRecord),
}

impl AuditRecord {
    /// Returns the request identifier carried by the record.
    #[must_use]
    pub const fn request_id(&self) -> &RequestId {
        match self {
            Self::StageSnapshot(record) => &record.request_id,
            Self::Decision(record) => &record.request_id,
        }
    }
}
