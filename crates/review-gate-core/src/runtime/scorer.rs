// crates/review-gate-core/src/runtime/scorer.rs
// ============================================================================
// Module: Review Gate Verification Scorer
// Description: Deterministic confidence scoring for analysis results.
// Purpose: Derive issue codes, confidence, and validity from an analysis result.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! The scorer is the default verification stage. It is pure and total over
//! any well-formed [`AnalysisResult`]:
//! - every risk label becomes a `RISK_<label>` issue, whatever its severity;
//! - empty findings add `EMPTY_FINDINGS`;
//! - comments shorter than 20 characters add `COMMENTS_TOO_SHORT`;
//! - confidence starts at 0.9 and loses 0.1 per issue, clamped to `[0.0, 1.0]`;
//! - the result is invalid with empty findings or confidence below 0.5.
//!
//! Confidence is computed in whole tenths so that equal issue counts always
//! produce bit-identical scores.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::AnalysisResult;
use crate::core::VerificationResult;
use crate::interfaces::StageError;
use crate::interfaces::VerificationStage;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Issue code emitted when the analysis produced no findings.
pub const EMPTY_FINDINGS: &str = "EMPTY_FINDINGS";
/// Issue code emitted when analysis comments are too short.
pub const COMMENTS_TOO_SHORT: &str = "COMMENTS_TOO_SHORT";
/// Prefix applied to risk labels to form issue codes.
pub const RISK_ISSUE_PREFIX: &str = "RISK_";
/// Minimum comment length in characters.
pub const MIN_COMMENT_CHARS: usize = 20;
/// Minimum confidence for a valid result.
pub const MIN_VALID_CONFIDENCE: f64 = 0.5;
/// Starting confidence, in tenths.
const BASE_CONFIDENCE_TENTHS: u32 = 9;
/// Upper clamp for confidence, in tenths.
const MAX_CONFIDENCE_TENTHS: u32 = 10;

// ============================================================================
// SECTION: Scoring
// ============================================================================

/// Scores an analysis result into a verification result.
#[must_use]
pub fn score(analysis: &AnalysisResult) -> VerificationResult {
    let mut issues: Vec<String> = analysis
        .risks
        .iter()
        .map(|risk| format!("{RISK_ISSUE_PREFIX}{}", risk.as_str()))
        .collect();

    let empty_findings = analysis.findings.is_empty();
    if empty_findings {
        issues.push(EMPTY_FINDINGS.to_string());
    }

    if analysis.comments.chars().count() < MIN_COMMENT_CHARS {
        issues.push(COMMENTS_TOO_SHORT.to_string());
    }

    let confidence = confidence_for(issues.len());
    let is_valid = !empty_findings && confidence >= MIN_VALID_CONFIDENCE;

    VerificationResult {
        document_id: analysis.document_id.clone(),
        confidence,
        issues,
        is_valid,
    }
}

/// Returns the confidence for an issue count.
#[must_use]
pub fn confidence_for(issue_count: usize) -> f64 {
    let issues = u32::try_from(issue_count).unwrap_or(u32::MAX);
    let tenths = BASE_CONFIDENCE_TENTHS.saturating_sub(issues).min(MAX_CONFIDENCE_TENTHS);
    f64::from(tenths) / 10.0
}

// ============================================================================
// SECTION: Verification Stage
// ============================================================================

/// Verification stage backed by [`score`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoringVerifier;

impl VerificationStage for ScoringVerifier {
    fn verify(&self, analysis: &AnalysisResult) -> Result<VerificationResult, StageError> {
        Ok(score(analysis))
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::confidence_for;

    #[test]
    fn confidence_steps_in_exact_tenths() {
        assert!((confidence_for(0) - 0.9).abs() < f64::EPSILON);
        assert!((confidence_for(2) - 0.7).abs() < f64::EPSILON);
        assert!(confidence_for(9).abs() < f64::EPSILON);
        assert!(confidence_for(usize::MAX).abs() < f64::EPSILON);
    }
}
