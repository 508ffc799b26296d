// crates/review-gate-core/tests/common/mod.rs
// =============================================================================
// Module: Core Test Helpers
// Description: Shared builders and stub collaborators for core tests.
// Purpose: Reduce duplication across integration tests for review-gate-core.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::sync::Arc;
use std::sync::Mutex;

use review_gate_core::AnalysisResult;
use review_gate_core::AnalysisStage;
use review_gate_core::AuditError;
use review_gate_core::AuditSink;
use review_gate_core::DecisionOutcome;
use review_gate_core::Document;
use review_gate_core::DocumentId;
use review_gate_core::ExtractionResult;
use review_gate_core::ExtractionStage;
use review_gate_core::FieldMap;
use review_gate_core::FieldValue;
use review_gate_core::Policy;
use review_gate_core::PolicyId;
use review_gate_core::RequestId;
use review_gate_core::RiskLabel;
use review_gate_core::RunState;
use review_gate_core::StageError;
use review_gate_core::StageName;

/// Comment text long enough to avoid `COMMENTS_TOO_SHORT`.
pub const LONG_COMMENT: &str = "a sufficiently long comment text";

/// Builds an analysis result for `doc-1`.
pub fn analysis(findings: &[(&str, FieldValue)], risks: &[&str], comments: &str) -> AnalysisResult {
    AnalysisResult {
        document_id: DocumentId::new("doc-1"),
        findings: findings
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.clone()))
            .collect::<FieldMap>(),
        risks: risks.iter().map(|risk| RiskLabel::parse(*risk)).collect(),
        comments: comments.to_string(),
    }
}

/// Builds a policy with the given threshold and allowed issue codes.
pub fn policy(min_confidence: f64, allowed: &[&str]) -> Policy {
    Policy {
        id: PolicyId::new("policy-test"),
        name: "Test Policy".to_string(),
        description: "Policy used by core tests.".to_string(),
        min_confidence,
        allowed_risks: allowed.iter().map(|risk| (*risk).to_string()).collect(),
    }
}

/// Builds a document with a title and file type.
pub fn document(id: &str) -> Document {
    Document::new(id, "Sample policy or contract text goes here...")
        .with_metadata("title", "Sample Policy")
        .with_metadata("file_type", "txt")
}

/// Extraction stage that records the document length.
pub struct LengthExtractor;

impl ExtractionStage for LengthExtractor {
    fn extract(&self, document: &Document) -> Result<ExtractionResult, StageError> {
        let mut structured_data = FieldMap::new();
        structured_data.insert("length_chars".to_string(), FieldValue::from(document.char_count()));
        Ok(ExtractionResult {
            document_id: document.id.clone(),
            structured_data,
            raw_text: document.content.clone(),
        })
    }
}

/// Analysis stage that returns a fixed analysis for any extraction.
pub struct FixedAnalyst {
    /// Findings to report.
    pub findings: FieldMap,
    /// Risks to report.
    pub risks: Vec<RiskLabel>,
    /// Comments to report.
    pub comments: String,
}

impl FixedAnalyst {
    /// Creates a fixed analyst from an analysis template.
    pub fn from_analysis(template: &AnalysisResult) -> Self {
        Self {
            findings: template.findings.clone(),
            risks: template.risks.clone(),
            comments: template.comments.clone(),
        }
    }
}

impl AnalysisStage for FixedAnalyst {
    fn analyze(&self, extraction: &ExtractionResult) -> Result<AnalysisResult, StageError> {
        Ok(AnalysisResult {
            document_id: extraction.document_id.clone(),
            findings: self.findings.clone(),
            risks: self.risks.clone(),
            comments: self.comments.clone(),
        })
    }
}

/// Extraction stage that always fails.
pub struct FailingExtractor;

impl ExtractionStage for FailingExtractor {
    fn extract(&self, _document: &Document) -> Result<ExtractionResult, StageError> {
        Err(StageError::Unavailable("upstream offline".to_string()))
    }
}

/// Analysis stage that always fails.
pub struct FailingAnalyst;

impl AnalysisStage for FailingAnalyst {
    fn analyze(&self, _extraction: &ExtractionResult) -> Result<AnalysisResult, StageError> {
        Err(StageError::Failed("model error".to_string()))
    }
}

/// Captured view of a run-state snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Observed {
    /// Request identifier.
    pub request_id: RequestId,
    /// Latest filled slot.
    pub latest: Option<StageName>,
    /// Verification confidence when present.
    pub confidence: Option<f64>,
}

/// Sink that records snapshots and decisions, optionally failing after N writes.
#[derive(Clone, Default)]
pub struct RecordingSink {
    /// Observed state snapshots.
    pub states: Arc<Mutex<Vec<Observed>>>,
    /// Observed decisions.
    pub decisions: Arc<Mutex<Vec<(RequestId, DecisionOutcome)>>>,
    /// Number of successful writes allowed before failing.
    pub fail_after: Option<usize>,
}

impl RecordingSink {
    /// Returns a sink that fails once `writes` records have been accepted.
    pub fn failing_after(writes: usize) -> Self {
        Self {
            fail_after: Some(writes),
            ..Self::default()
        }
    }

    /// Returns the number of accepted writes.
    fn writes(&self) -> usize {
        self.states.lock().unwrap().len() + self.decisions.lock().unwrap().len()
    }

    /// Fails when the write budget is exhausted.
    fn check_budget(&self) -> Result<(), AuditError> {
        match self.fail_after {
            Some(limit) if self.writes() >= limit => Err(AuditError::Io("disk full".to_string())),
            _ => Ok(()),
        }
    }
}

impl AuditSink for RecordingSink {
    fn log_state(&self, state: &RunState) -> Result<(), AuditError> {
        self.check_budget()?;
        self.states.lock().unwrap().push(Observed {
            request_id: state.request_id().clone(),
            latest: state.latest_stage(),
            confidence: state.verification().map(|verification| verification.confidence),
        });
        Ok(())
    }

    fn log_decision(
        &self,
        request_id: &RequestId,
        decision: &DecisionOutcome,
    ) -> Result<(), AuditError> {
        self.check_budget()?;
        self.decisions.lock().unwrap().push((request_id.clone(), decision.clone()));
        Ok(())
    }
}
