// crates/review-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Review Gate Interfaces
// Description: Backend-agnostic interfaces for pipeline stages and audit sinks.
// Purpose: Define the contract surfaces consumed by the Review Gate orchestrator.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how Review Gate integrates with content-understanding
//! services and audit storage without embedding backend-specific details.
//! Stages return explicit results; degrading a failed stage into a fallback
//! payload is the job of an adapter around the stage, never of the
//! orchestrator. Audit sinks must be safe for concurrent appends from
//! independent runs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use thiserror::Error;

use crate::core::AnalysisResult;
use crate::core::DecisionOutcome;
use crate::core::Document;
use crate::core::ExtractionResult;
use crate::core::RequestId;
use crate::core::RunState;
use crate::core::VerificationResult;

// ============================================================================
// SECTION: Stage Errors
// ============================================================================

/// Stage collaborator errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageError {
    /// Upstream service could not be reached.
    #[error("stage upstream unavailable: {0}")]
    Unavailable(String),
    /// Stage produced output that could not be interpreted.
    #[error("stage returned invalid output: {0}")]
    InvalidOutput(String),
    /// Stage failed for another reason.
    #[error("stage failed: {0}")]
    Failed(String),
}

// ============================================================================
// SECTION: Stages
// ============================================================================

/// Extraction stage turning a document into structured data.
pub trait ExtractionStage {
    /// Returns a stable name recorded in the audit context.
    fn name(&self) -> &str {
        "extractor"
    }

    /// Extracts structured data from a document.
    ///
    /// # Errors
    ///
    /// Returns [`StageError`] when extraction fails.
    fn extract(&self, document: &Document) -> Result<ExtractionResult, StageError>;
}

/// Analysis stage turning extracted data into findings and risks.
pub trait AnalysisStage {
    /// Returns a stable name recorded in the audit context.
    fn name(&self) -> &str {
        "analyst"
    }

    /// Analyzes an extraction result.
    ///
    /// # Errors
    ///
    /// Returns [`StageError`] when analysis fails.
    fn analyze(&self, extraction: &ExtractionResult) -> Result<AnalysisResult, StageError>;
}

/// Verification stage scoring an analysis result.
pub trait VerificationStage {
    /// Returns a stable name recorded in the audit context.
    fn name(&self) -> &str {
        "verifier"
    }

    /// Verifies an analysis result.
    ///
    /// # Errors
    ///
    /// Returns [`StageError`] when verification fails.
    fn verify(&self, analysis: &AnalysisResult) -> Result<VerificationResult, StageError>;
}

// ============================================================================
// SECTION: Audit Sink
// ============================================================================

/// Audit sink errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuditError {
    /// Sink I/O failed.
    #[error("audit sink io error: {0}")]
    Io(String),
    /// Record could not be encoded.
    #[error("audit record encoding failed: {0}")]
    Encode(String),
    /// Sink reported another error.
    #[error("audit sink error: {0}")]
    Sink(String),
}

/// Append-only sink for run-state snapshots and final decisions.
pub trait AuditSink: Send + Sync {
    /// Records a snapshot of the run state after a stage transition.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError`] when the record cannot be persisted.
    fn log_state(&self, state: &RunState) -> Result<(), AuditError>;

    /// Records the final decision of a run.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError`] when the record cannot be persisted.
    fn log_decision(
        &self,
        request_id: &RequestId,
        decision: &DecisionOutcome,
    ) -> Result<(), AuditError>;
}

impl<T: AuditSink + ?Sized> AuditSink for Arc<T> {
    fn log_state(&self, state: &RunState) -> Result<(), AuditError> {
        (**self).log_state(state)
    }

    fn log_decision(
        &self,
        request_id: &RequestId,
        decision: &DecisionOutcome,
    ) -> Result<(), AuditError> {
        (**self).log_decision(request_id, decision)
    }
}

impl<T: AuditSink + ?Sized> AuditSink for Box<T> {
    fn log_state(&self, state: &RunState) -> Result<(), AuditError> {
        (**self).log_state(state)
    }

    fn log_decision(
        &self,
        request_id: &RequestId,
        decision: &DecisionOutcome,
    ) -> Result<(), AuditError> {
        (**self).log_decision(request_id, decision)
    }
}
