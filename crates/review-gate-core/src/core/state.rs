// crates/review-gate-core/src/core/state.rs
// ============================================================================
// Module: Review Gate Run State
// Description: Per-request record of stage outputs and audit context.
// Purpose: Enforce monotonic, ordered stage transitions within a single run.
// Dependencies: crate::core::{document, identifiers, results, value}, serde, thiserror
// ============================================================================

//! ## Overview
//! A [`RunState`] is created once per orchestrator run and dropped when the
//! run returns. Stage outputs are filled in through `record_*` methods that
//! enforce the fixed order extraction, analysis, verification, decision. A
//! field that has been set is never cleared or replaced. The `context` map
//! collects stage metadata for audit snapshots and is never read back by the
//! pipeline.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::document::Document;
use crate::core::identifiers::RequestId;
use crate::core::results::AnalysisResult;
use crate::core::results::DecisionOutcome;
use crate::core::results::ExtractionResult;
use crate::core::results::VerificationResult;
use crate::core::value::FieldMap;
use crate::core::value::FieldValue;

// ============================================================================
// SECTION: Stage Names
// ============================================================================

/// Ordered run-state slots.
///
/// # Invariants
/// - Declaration order is the transition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageName {
    /// Extraction result slot.
    Extraction,
    /// Analysis result slot.
    Analysis,
    /// Verification result slot.
    Verification,
    /// Final decision slot.
    Decision,
}

impl StageName {
    /// Returns a stable label for the stage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Extraction => "extraction",
            Self::Analysis => "analysis",
            Self::Verification => "verification",
            Self::Decision => "decision",
        }
    }
}

impl fmt::Display for StageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Run-state transition errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - A failed transition leaves the run state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunStateError {
    /// The slot was already filled.
    #[error("run state {0} already recorded")]
    AlreadyRecorded(StageName),
    /// A preceding slot has not been filled yet.
    #[error("run state {stage} recorded before {missing}")]
    OutOfOrder {
        /// Slot being recorded.
        stage: StageName,
        /// Earlier slot that is still empty.
        missing: StageName,
    },
}

// ============================================================================
// SECTION: Run State
// ============================================================================

/// Mutable per-request pipeline record.
///
/// # Invariants
/// - Optional slots transition `None -> Some` in [`StageName`] order and never regress.
/// - `request_id` is fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunState {
    /// Request identifier for this run.
    request_id: RequestId,
    /// Document under review.
    document: Document,
    /// Extraction stage output.
    extraction: Option<ExtractionResult>,
    /// Analysis stage output.
    analysis: Option<AnalysisResult>,
    /// Verification stage output.
    verification: Option<Arc<VerificationResult>>,
    /// Final decision.
    decision: Option<DecisionOutcome>,
    /// Stage metadata accumulated for audit.
    context: FieldMap,
}

impl RunState {
    /// Creates an empty run state for a document.
    #[must_use]
    pub fn new(request_id: RequestId, document: Document) -> Self {
        Self {
            request_id,
            document,
            extraction: None,
            analysis: None,
            verification: None,
            decision: None,
            context: FieldMap::new(),
        }
    }

    /// Returns the request identifier.
    #[must_use]
    pub const fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    /// Returns the document under review.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the extraction result, if recorded.
    #[must_use]
    pub const fn extraction(&self) -> Option<&ExtractionResult> {
        self.extraction.as_ref()
    }

    /// Returns the analysis result, if recorded.
    #[must_use]
    pub const fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    /// Returns the verification result, if recorded.
    #[must_use]
    pub const fn verification(&self) -> Option<&Arc<VerificationResult>> {
        self.verification.as_ref()
    }

    /// Returns the final decision, if recorded.
    #[must_use]
    pub const fn decision(&self) -> Option<&DecisionOutcome> {
        self.decision.as_ref()
    }

    /// Returns the audit context.
    #[must_use]
    pub const fn context(&self) -> &FieldMap {
        &self.context
    }

    /// Returns true when the given slot has been filled.
    #[must_use]
    pub const fn has(&self, stage: StageName) -> bool {
        match stage {
            StageName::Extraction => self.extraction.is_some(),
            StageName::Analysis => self.analysis.is_some(),
            StageName::Verification => self.verification.is_some(),
            StageName::Decision => self.decision.is_some(),
        }
    }

    /// Returns the most recently filled slot.
    #[must_use]
    pub const fn latest_stage(&self) -> Option<StageName> {
        if self.decision.is_some() {
            Some(StageName::Decision)
        } else if self.verification.is_some() {
            Some(StageName::Verification)
        } else if self.analysis.is_some() {
            Some(StageName::Analysis)
        } else if self.extraction.is_some() {
            Some(StageName::Extraction)
        } else {
            None
        }
    }

    /// Writes an audit context entry.
    pub fn note(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.context.insert(key.into(), value.into());
    }

    /// Records the extraction result.
    ///
    /// # Errors
    ///
    /// Returns [`RunStateError::AlreadyRecorded`] when extraction was already recorded.
    pub fn record_extraction(&mut self, extraction: ExtractionResult) -> Result<(), RunStateError> {
        self.ensure_next(StageName::Extraction)?;
        self.extraction = Some(extraction);
        Ok(())
    }

    /// Records the analysis result.
    ///
    /// # Errors
    ///
    /// Returns [`RunStateError`] when analysis was already recorded or
    /// extraction is missing.
    pub fn record_analysis(&mut self, analysis: AnalysisResult) -> Result<(), RunStateError> {
        self.ensure_next(StageName::Analysis)?;
        self.analysis = Some(analysis);
        Ok(())
    }

    /// Records the verification result and returns the shared handle.
    ///
    /// # Errors
    ///
    /// Returns [`RunStateError`] when verification was already recorded or an
    /// earlier slot is missing.
    pub fn record_verification(
        &mut self,
        verification: VerificationResult,
    ) -> Result<Arc<VerificationResult>, RunStateError> {
        self.ensure_next(StageName::Verification)?;
        let shared = Arc::new(verification);
        self.verification = Some(Arc::clone(&shared));
        Ok(shared)
    }

    /// Records the final decision.
    ///
    /// # Errors
    ///
    /// Returns [`RunStateError`] when a decision was already recorded or an
    /// earlier slot is missing.
    pub fn record_decision(&mut self, decision: DecisionOutcome) -> Result<(), RunStateError> {
        self.ensure_next(StageName::Decision)?;
        self.decision = Some(decision);
        Ok(())
    }

    /// Checks that `stage` is empty and every earlier slot is filled.
    fn ensure_next(&self, stage: StageName) -> Result<(), RunStateError> {
        if self.has(stage) {
            return Err(RunStateError::AlreadyRecorded(stage));
        }
        let earlier = [
            StageName::Extraction,
            StageName::Analysis,
            StageName::Verification,
            StageName::Decision,
        ];
        if let Some(missing) =
            earlier.into_iter().take_while(|prior| *prior < stage).find(|prior| !self.has(*prior))
        {
            return Err(RunStateError::OutOfOrder {
                stage,
                missing,
            });
        }
        Ok(())
    }
}
