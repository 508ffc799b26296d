// crates/review-gate-core/src/runtime/audit.rs
// ============================================================================
// Module: Review Gate In-Memory Audit Sink
// Description: Simple in-memory audit sink for tests and embedding.
// Purpose: Provide a deterministic sink implementation without external deps.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! This module provides an in-memory implementation of [`AuditSink`] that
//! keeps every record in append order. Clones share the same buffer, so a
//! test can hand one clone to an orchestrator and inspect another.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;

use crate::core::AuditRecord;
use crate::core::DEFAULT_HASH_ALGORITHM;
use crate::core::DecisionAuditRecord;
use crate::core::DecisionOutcome;
use crate::core::RequestId;
use crate::core::RunState;
use crate::core::StateSnapshotRecord;
use crate::interfaces::AuditError;
use crate::interfaces::AuditSink;

// ============================================================================
// SECTION: In-Memory Sink
// ============================================================================

/// In-memory audit sink.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAuditSink {
    /// Records protected by a mutex.
    records: Arc<Mutex<Vec<AuditRecord>>>,
}

impl InMemoryAuditSink {
    /// Creates an empty in-memory audit sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every record in append order.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Sink`] when the record buffer is poisoned.
    pub fn records(&self) -> Result<Vec<AuditRecord>, AuditError> {
        Ok(self.lock()?.clone())
    }

    /// Appends a record.
    fn push(&self, record: AuditRecord) -> Result<(), AuditError> {
        self.lock()?.push(record);
        Ok(())
    }

    /// Locks the record buffer.
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<AuditRecord>>, AuditError> {
        self.records.lock().map_err(|_| AuditError::Sink("audit sink mutex poisoned".to_string()))
    }
}

impl AuditSink for InMemoryAuditSink {
    fn log_state(&self, state: &RunState) -> Result<(), AuditError> {
        self.push(AuditRecord::StageSnapshot(StateSnapshotRecord::from_state(state)))
    }

    fn log_decision(
        &self,
        request_id: &RequestId,
        decision: &DecisionOutcome,
    ) -> Result<(), AuditError> {
        let record =
            DecisionAuditRecord::from_outcome(request_id, decision, DEFAULT_HASH_ALGORITHM)
                .map_err(|err| AuditError::Encode(err.to_string()))?;
        self.push(AuditRecord::Decision(record))
    }
}
