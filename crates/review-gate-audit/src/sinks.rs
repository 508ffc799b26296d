// crates/review-gate-audit/src/sinks.rs
// ============================================================================
// Module: Audit Sinks
// Description: File, stderr, and no-op audit sinks.
// Purpose: Route Review Gate audit lines to their configured destination.
// Dependencies: review-gate-core, crate::envelope
// ============================================================================

//! ## Overview
//! File and stderr sinks serialize each record through [`encode_line`] and
//! write it under a lock so concurrent runs never interleave partial lines.
//! Unlike a best-effort log, every failure is returned to the orchestrator,
//! which aborts the run.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;

use review_gate_core::AuditError;
use review_gate_core::AuditSink;
use review_gate_core::DecisionOutcome;
use review_gate_core::RequestId;
use review_gate_core::RunState;

use crate::envelope::AuditEnvelope;
use crate::envelope::encode_line;

// ============================================================================
// SECTION: File Sink
// ============================================================================

/// Audit sink that appends JSON lines to a file.
#[derive(Debug)]
pub struct JsonLinesAuditSink {
    /// Path of the audit log.
    path: PathBuf,
    /// File handle used for append-only logging.
    file: Mutex<File>,
}

impl JsonLinesAuditSink {
    /// Opens the audit log file in append mode, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Io`] when the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self, AuditError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|err| AuditError::Io(format!("{}: {err}", path.display())))?;
        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    /// Returns the audit log path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one envelope as a line and flushes it.
    fn append(&self, envelope: &AuditEnvelope) -> Result<(), AuditError> {
        let payload = encode_line(envelope)?;
        let mut file =
            self.file.lock().map_err(|_| AuditError::Sink("audit log mutex poisoned".to_string()))?;
        write_line(&mut *file, &payload)
    }
}

impl AuditSink for JsonLinesAuditSink {
    fn log_state(&self, state: &RunState) -> Result<(), AuditError> {
        self.append(&AuditEnvelope::snapshot(state))
    }

    fn log_decision(
        &self,
        request_id: &RequestId,
        decision: &DecisionOutcome,
    ) -> Result<(), AuditError> {
        self.append(&AuditEnvelope::decision(request_id, decision)?)
    }
}

// ============================================================================
// SECTION: Stderr Sink
// ============================================================================

/// Audit sink that writes JSON lines to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrAuditSink;

impl StderrAuditSink {
    /// Writes one envelope to stderr.
    fn append(envelope: &AuditEnvelope) -> Result<(), AuditError> {
        let payload = encode_line(envelope)?;
        let mut stderr = io::stderr().lock();
        write_line(&mut stderr, &payload)
    }
}

impl AuditSink for StderrAuditSink {
    fn log_state(&self, state: &RunState) -> Result<(), AuditError> {
        Self::append(&AuditEnvelope::snapshot(state))
    }

    fn log_decision(
        &self,
        request_id: &RequestId,
        decision: &DecisionOutcome,
    ) -> Result<(), AuditError> {
        Self::append(&AuditEnvelope::decision(request_id, decision)?)
    }
}

// ============================================================================
// SECTION: No-op Sink
// ============================================================================

/// Audit sink that discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAuditSink;

impl AuditSink for NoopAuditSink {
    fn log_state(&self, _state: &RunState) -> Result<(), AuditError> {
        Ok(())
    }

    fn log_decision(
        &self,
        _request_id: &RequestId,
        _decision: &DecisionOutcome,
    ) -> Result<(), AuditError> {
        Ok(())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Writes a payload followed by a newline and flushes the writer.
fn write_line<W: Write + ?Sized>(writer: &mut W, payload: &str) -> Result<(), AuditError> {
    writeln!(writer, "{payload}").map_err(|err| AuditError::Io(err.to_string()))?;
    writer.flush().map_err(|err| AuditError::Io(err.to_string()))
}
