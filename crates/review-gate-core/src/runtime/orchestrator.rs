// crates/review-gate-core/src/runtime/orchestrator.rs
// ============================================================================
// Module: Review Gate Orchestrator
// Description: Ordered stage execution, run-state updates, and audit emission.
// Purpose: Thread one document through the pipeline into a governed decision.
// Dependencies: crate::{core, interfaces, runtime}, thiserror
// ============================================================================

//! ## Overview
//! The orchestrator is the single execution path for a review. A run
//! extracts, analyzes, and verifies the document, snapshotting the run state
//! to the audit sink after each stage, then evaluates the policy and records
//! the decision. Every run owns its own [`RunState`]; the orchestrator keeps
//! nothing between calls, so independent runs may share it across threads
//! when the stages and sink allow it.
//!
//! Failures are never converted into decisions here. A stage error, a sink
//! error, or a run-state violation aborts the run and no decision is
//! returned.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::DecisionOutcome;
use crate::core::DecisionStatus;
use crate::core::Document;
use crate::core::FieldValue;
use crate::core::Policy;
use crate::core::RequestId;
use crate::core::RunState;
use crate::core::RunStateError;
use crate::core::StageName;
use crate::core::results::LENGTH_CHARS_KEY;
use crate::interfaces::AnalysisStage;
use crate::interfaces::AuditError;
use crate::interfaces::AuditSink;
use crate::interfaces::ExtractionStage;
use crate::interfaces::StageError;
use crate::interfaces::VerificationStage;
use crate::runtime::PolicyEngine;
use crate::runtime::ScoringVerifier;

// ============================================================================
// SECTION: Context Keys
// ============================================================================

/// Context key for the applied policy identifier.
pub const CONTEXT_POLICY_ID: &str = "policy_id";
/// Context key for the document title from metadata.
pub const CONTEXT_DOCUMENT_TITLE: &str = "document_title";
/// Context key for the document file type from metadata.
pub const CONTEXT_FILE_TYPE: &str = "file_type";
/// Context key for the stage currently executing.
pub const CONTEXT_STAGE: &str = "stage";
/// Context key for the name of the last stage collaborator invoked.
pub const CONTEXT_LAST_STAGE: &str = "last_stage";
/// Context key for the extracted document length.
pub const CONTEXT_EXTRACTION_LENGTH: &str = "extraction_length_chars";
/// Context key for the number of reported risks.
pub const CONTEXT_RISK_COUNT: &str = "analysis_risk_count";
/// Context key for the verification confidence.
pub const CONTEXT_CONFIDENCE: &str = "verification_confidence";
/// Context key for the number of verification issues.
pub const CONTEXT_ISSUE_COUNT: &str = "verification_issue_count";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Fatal orchestrator errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - A policy rejection is never an error.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// A stage collaborator failed instead of returning a fallback result.
    #[error("{stage} stage failed: {source}")]
    Stage {
        /// Stage that failed.
        stage: StageName,
        /// Collaborator error.
        source: StageError,
    },
    /// The audit sink could not persist a record.
    #[error(transparent)]
    Audit(#[from] AuditError),
    /// A run-state transition was rejected.
    #[error(transparent)]
    State(#[from] RunStateError),
}

// ============================================================================
// SECTION: Orchestrator
// ============================================================================

/// Pipeline orchestrator over injected stages and an audit sink.
pub struct Orchestrator<E, A, S, V = ScoringVerifier> {
    /// Extraction stage.
    extractor: E,
    /// Analysis stage.
    analyst: A,
    /// Verification stage.
    verifier: V,
    /// Audit sink.
    sink: S,
    /// Policy engine.
    engine: PolicyEngine,
}

impl<E, A, S> Orchestrator<E, A, S, ScoringVerifier>
where
    E: ExtractionStage,
    A: AnalysisStage,
    S: AuditSink,
{
    /// Creates an orchestrator with the default scoring verifier.
    #[must_use]
    pub const fn new(extractor: E, analyst: A, sink: S) -> Self {
        Self::with_verifier(extractor, analyst, ScoringVerifier, sink)
    }
}

impl<E, A, S, V> Orchestrator<E, A, S, V>
where
    E: ExtractionStage,
    A: AnalysisStage,
    S: AuditSink,
    V: VerificationStage,
{
    /// Creates an orchestrator with a custom verification stage.
    #[must_use]
    pub const fn with_verifier(extractor: E, analyst: A, verifier: V, sink: S) -> Self {
        Self {
            extractor,
            analyst,
            verifier,
            sink,
            engine: PolicyEngine::new(),
        }
    }

    /// Returns the audit sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Reviews one document against a policy.
    ///
    /// # Errors
    ///
    /// Returns [`OrchestratorError`] when a stage fails, the audit sink
    /// cannot persist a record, or a run-state transition is rejected.
    pub fn run(
        &self,
        document: Document,
        policy: &Policy,
    ) -> Result<DecisionOutcome, OrchestratorError> {
        let mut state = RunState::new(RequestId::generate(), document);
        let title = metadata_or_null(&state, "title");
        let file_type = metadata_or_null(&state, "file_type");
        state.note(CONTEXT_POLICY_ID, policy.id.as_str());
        state.note(CONTEXT_DOCUMENT_TITLE, title);
        state.note(CONTEXT_FILE_TYPE, file_type);

        // Extraction
        state.note(CONTEXT_STAGE, StageName::Extraction.as_str());
        state.note(CONTEXT_LAST_STAGE, self.extractor.name());
        let extraction = self.extractor.extract(state.document()).map_err(|source| {
            OrchestratorError::Stage {
                stage: StageName::Extraction,
                source,
            }
        })?;
        let length_chars = extraction
            .structured_data
            .get(LENGTH_CHARS_KEY)
            .filter(|value| value.as_f64().is_some())
            .cloned()
            .unwrap_or_else(|| FieldValue::from(state.document().char_count()));
        state.note(CONTEXT_EXTRACTION_LENGTH, length_chars);
        state.record_extraction(extraction)?;
        self.sink.log_state(&state)?;

        // Analysis
        state.note(CONTEXT_STAGE, StageName::Analysis.as_str());
        state.note(CONTEXT_LAST_STAGE, self.analyst.name());
        let extraction = recorded(state.extraction(), StageName::Analysis, StageName::Extraction)?;
        let analysis = self.analyst.analyze(extraction).map_err(|source| {
            OrchestratorError::Stage {
                stage: StageName::Analysis,
                source,
            }
        })?;
        state.note(CONTEXT_RISK_COUNT, analysis.risks.len());
        state.record_analysis(analysis)?;
        self.sink.log_state(&state)?;

        // Verification
        state.note(CONTEXT_STAGE, StageName::Verification.as_str());
        state.note(CONTEXT_LAST_STAGE, self.verifier.name());
        let analysis = recorded(state.analysis(), StageName::Verification, StageName::Analysis)?;
        let verification = self.verifier.verify(analysis).map_err(|source| {
            OrchestratorError::Stage {
                stage: StageName::Verification,
                source,
            }
        })?;
        state.note(CONTEXT_CONFIDENCE, verification.confidence);
        state.note(CONTEXT_ISSUE_COUNT, verification.issues.len());
        let verification = state.record_verification(verification)?;
        self.sink.log_state(&state)?;

        // Policy evaluation
        let control = self.engine.evaluate(policy, &verification);
        let final_summary = match control.status {
            DecisionStatus::Approved => {
                let analysis =
                    recorded(state.analysis(), StageName::Decision, StageName::Analysis)?;
                Some(analysis.comments.clone())
            }
            DecisionStatus::Rejected => None,
        };
        let decision = DecisionOutcome {
            document_id: state.document().id.clone(),
            status: control.status,
            final_summary,
            reasons: control.reasons,
            policy_id: policy.id.clone(),
            verification,
        };
        state.record_decision(decision.clone())?;
        self.sink.log_decision(state.request_id(), &decision)?;
        Ok(decision)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns a metadata entry from the run's document, or null when absent.
fn metadata_or_null(state: &RunState, key: &str) -> FieldValue {
    state.document().metadata_value(key).cloned().unwrap_or(FieldValue::Null)
}

/// Returns a recorded slot or an ordering error naming the missing slot.
fn recorded<T>(slot: Option<&T>, stage: StageName, missing: StageName) -> Result<&T, RunStateError> {
    slot.ok_or(RunStateError::OutOfOrder {
        stage,
        missing,
    })
}
