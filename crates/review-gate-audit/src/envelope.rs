// crates/review-gate-audit/src/envelope.rs
// ============================================================================
// Module: Audit Envelope
// Description: Timestamped wrapper for core audit records.
// Purpose: Give every audit line a stable shape and a write time.
// Dependencies: review-gate-core, serde, serde_json
// ============================================================================

//! ## Overview
//! The envelope flattens a core [`AuditRecord`] into a single JSON object
//! and adds `timestamp_ms`. The `event` tag comes from the record itself.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use review_gate_core::AuditError;
use review_gate_core::AuditRecord;
use review_gate_core::DEFAULT_HASH_ALGORITHM;
use review_gate_core::DecisionAuditRecord;
use review_gate_core::DecisionOutcome;
use review_gate_core::RequestId;
use review_gate_core::RunState;
use review_gate_core::StateSnapshotRecord;
use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Envelope
// ============================================================================

/// One audit line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEnvelope {
    /// Write time (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Audit record, flattened into the line.
    #[serde(flatten)]
    pub record: AuditRecord,
}

impl AuditEnvelope {
    /// Wraps a record with the current time.
    #[must_use]
    pub fn new(record: AuditRecord) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        Self {
            timestamp_ms,
            record,
        }
    }

    /// Builds a stage snapshot envelope.
    #[must_use]
    pub fn snapshot(state: &RunState) -> Self {
        Self::new(AuditRecord::StageSnapshot(StateSnapshotRecord::from_state(state)))
    }

    /// Builds a decision envelope, hashing the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Encode`] when the outcome cannot be canonicalized.
    pub fn decision(request_id: &RequestId, decision: &DecisionOutcome) -> Result<Self, AuditError> {
        let record = DecisionAuditRecord::from_outcome(request_id, decision, DEFAULT_HASH_ALGORITHM)
            .map_err(|err| AuditError::Encode(err.to_string()))?;
        Ok(Self::new(AuditRecord::Decision(record)))
    }
}

// ============================================================================
// SECTION: Encoding
// ============================================================================

/// Serializes an envelope as a single JSON line without the trailing newline.
///
/// # Errors
///
/// Returns [`AuditError::Encode`] when serialization fails.
pub fn encode_line(envelope: &AuditEnvelope) -> Result<String, AuditError> {
    serde_json::to_string(envelope).map_err(|err| AuditError::Encode(err.to_string()))
}
