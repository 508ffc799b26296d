// crates/review-gate-core/src/core/results.rs
// ============================================================================
// Module: Review Gate Stage Results
// Description: Extraction, analysis, verification, and decision payloads.
// Purpose: Define the immutable outputs produced by each pipeline stage.
// Dependencies: crate::core::{identifiers, risk, value}, serde
// ============================================================================

//! ## Overview
//! Each stage produces exactly one result per run. Results are immutable once
//! created; the orchestrator moves them into the run state and shares the
//! verification result with the final [`DecisionOutcome`] by reference count
//! rather than copying it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::DocumentId;
use crate::core::identifiers::PolicyId;
use crate::core::risk::RiskLabel;
use crate::core::value::FieldMap;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Conventional structured-data key holding the document length in characters.
pub const LENGTH_CHARS_KEY: &str = "length_chars";

// ============================================================================
// SECTION: Extraction
// ============================================================================

/// Output of the extraction stage.
///
/// # Invariants
/// - `structured_data` is opaque to the core except for [`LENGTH_CHARS_KEY`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Identifier of the source document.
    pub document_id: DocumentId,
    /// Structured data keyed by convention.
    #[serde(default)]
    pub structured_data: FieldMap,
    /// Raw text the extraction was derived from.
    pub raw_text: String,
}

impl ExtractionResult {
    /// Returns the conventional `length_chars` value when present and numeric.
    #[must_use]
    pub fn length_chars(&self) -> Option<f64> {
        self.structured_data.get(LENGTH_CHARS_KEY).and_then(|value| value.as_f64())
    }
}

// ============================================================================
// SECTION: Analysis
// ============================================================================

/// Output of the analysis stage.
///
/// # Invariants
/// - `risks` preserve the order reported by the analysis collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Identifier of the source document.
    pub document_id: DocumentId,
    /// Open findings mapping.
    #[serde(default)]
    pub findings: FieldMap,
    /// Reported risk labels.
    #[serde(default)]
    pub risks: Vec<RiskLabel>,
    /// Free-text analyst comments (absent is treated as empty).
    #[serde(default)]
    pub comments: String,
}

// ============================================================================
// SECTION: Verification
// ============================================================================

/// Output of the verification stage.
///
/// # Invariants
/// - `confidence` is within `[0.0, 1.0]` when produced by the scorer.
/// - `issues` preserve detection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Identifier of the source document.
    pub document_id: DocumentId,
    /// Confidence score in `[0.0, 1.0]`.
    pub confidence: f64,
    /// Issue codes detected during verification.
    pub issues: Vec<String>,
    /// Whether the analysis output is considered valid.
    pub is_valid: bool,
}

// ============================================================================
// SECTION: Decisions
// ============================================================================

/// Final decision status.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    /// Document passed every policy check.
    Approved,
    /// Document failed at least one policy check.
    Rejected,
}

impl DecisionStatus {
    /// Returns a stable label for the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Governed decision returned to the caller of a run.
///
/// # Invariants
/// - `final_summary` is `Some` only when `status` is [`DecisionStatus::Approved`].
/// - `verification` is the same allocation stored in the run state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionOutcome {
    /// Identifier of the reviewed document.
    pub document_id: DocumentId,
    /// Decision status.
    pub status: DecisionStatus,
    /// Analysis comments when approved.
    pub final_summary: Option<String>,
    /// Human-readable reasons, in rule order.
    pub reasons: Vec<String>,
    /// Identifier of the policy applied.
    pub policy_id: PolicyId,
    /// Verification result the decision was based on.
    pub verification: Arc<VerificationResult>,
}

impl DecisionOutcome {
    /// Returns true when the document was approved.
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.status == DecisionStatus::Approved
    }
}
