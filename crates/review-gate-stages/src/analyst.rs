// crates/review-gate-stages/src/analyst.rs
// ============================================================================
// Module: Heuristic Analyst
// Description: Analysis stage flagging long documents.
// Purpose: Produce findings and risks from extracted length alone.
// Dependencies: review-gate-core
// ============================================================================

//! ## Overview
//! The heuristic analyst reads the extracted `length_chars` value and reports
//! whether the document is long. A long document also carries the
//! [`LENGTH_WARNING_RISK`] label so the scorer surfaces it as an issue that a
//! policy can allow or reject.

// ============================================================================
// SECTION: Imports
// ============================================================================

use review_gate_core::AnalysisResult;
use review_gate_core::AnalysisStage;
use review_gate_core::ExtractionResult;
use review_gate_core::FieldMap;
use review_gate_core::FieldValue;
use review_gate_core::RiskLabel;
use review_gate_core::StageError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Findings key set when the document exceeds the length threshold.
pub const IS_LONG_DOCUMENT_KEY: &str = "is_long_document";
/// Risk label reported for long documents.
pub const LENGTH_WARNING_RISK: &str = "LOW_LENGTH_WARNING";
/// Comment attached to every heuristic analysis.
pub const HEURISTIC_COMMENT: &str = "Initial heuristic analysis only.";
/// Default length threshold in characters.
pub const DEFAULT_LONG_DOCUMENT_CHARS: u32 = 2000;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Configuration for the heuristic analyst.
///
/// # Invariants
/// - A document is long when its length is strictly greater than `long_document_chars`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicAnalystConfig {
    /// Length threshold in characters.
    pub long_document_chars: u32,
}

impl Default for HeuristicAnalystConfig {
    fn default() -> Self {
        Self {
            long_document_chars: DEFAULT_LONG_DOCUMENT_CHARS,
        }
    }
}

// ============================================================================
// SECTION: Analyst
// ============================================================================

/// Analysis stage driven by extracted length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeuristicAnalyst {
    /// Analyst configuration.
    config: HeuristicAnalystConfig,
}

impl HeuristicAnalyst {
    /// Creates an analyst with the given configuration.
    #[must_use]
    pub const fn new(config: HeuristicAnalystConfig) -> Self {
        Self {
            config,
        }
    }

    /// Returns the analyst configuration.
    #[must_use]
    pub const fn config(&self) -> HeuristicAnalystConfig {
        self.config
    }
}

impl AnalysisStage for HeuristicAnalyst {
    fn analyze(&self, extraction: &ExtractionResult) -> Result<AnalysisResult, StageError> {
        // A missing or non-numeric length counts as zero.
        let length = extraction.length_chars().unwrap_or(0.0);
        let is_long = length > f64::from(self.config.long_document_chars);

        let mut findings = FieldMap::new();
        findings.insert(IS_LONG_DOCUMENT_KEY.to_string(), FieldValue::from(is_long));

        let risks =
            if is_long { vec![RiskLabel::parse(LENGTH_WARNING_RISK)] } else { Vec::new() };

        Ok(AnalysisResult {
            document_id: extraction.document_id.clone(),
            findings,
            risks,
            comments: HEURISTIC_COMMENT.to_string(),
        })
    }
}
