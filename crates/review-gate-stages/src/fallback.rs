// crates/review-gate-stages/src/fallback.rs
// ============================================================================
// Module: Fallback Adapters
// Description: Stage wrappers that degrade failures into fail-closed results.
// Purpose: Keep the pipeline producing decisions when a stage is unavailable.
// Dependencies: review-gate-core
// ============================================================================

//! ## Overview
//! Fallback adapters wrap an inner stage. When the inner stage succeeds its
//! result passes through untouched. When it fails the adapter returns a
//! degraded payload instead of an error:
//! - extraction records `fallback = true`, the error text, and the content
//!   length so analysis can still run;
//! - analysis returns empty findings, which the scorer always marks invalid,
//!   so a degraded analysis can never be approved.

// ============================================================================
// SECTION: Imports
// ============================================================================

use review_gate_core::AnalysisResult;
use review_gate_core::AnalysisStage;
use review_gate_core::Document;
use review_gate_core::ExtractionResult;
use review_gate_core::ExtractionStage;
use review_gate_core::FieldMap;
use review_gate_core::FieldValue;
use review_gate_core::StageError;
use review_gate_core::results::LENGTH_CHARS_KEY;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Structured-data key marking a degraded extraction.
pub const FALLBACK_KEY: &str = "fallback";
/// Structured-data key carrying the inner stage error.
pub const ERROR_KEY: &str = "error";
/// Comment prefix for a degraded analysis.
pub const ANALYSIS_UNAVAILABLE_PREFIX: &str = "Analysis unavailable: ";

// ============================================================================
// SECTION: Extraction Fallback
// ============================================================================

/// Extraction adapter returning a degraded result on failure.
#[derive(Debug, Clone, Default)]
pub struct FallbackExtraction<S> {
    /// Wrapped stage.
    inner: S,
}

impl<S> FallbackExtraction<S> {
    /// Wraps an extraction stage.
    #[must_use]
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
        }
    }
}

impl<S: ExtractionStage> ExtractionStage for FallbackExtraction<S> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn extract(&self, document: &Document) -> Result<ExtractionResult, StageError> {
        match self.inner.extract(document) {
            Ok(result) => Ok(result),
            Err(err) => {
                let mut structured_data = FieldMap::new();
                structured_data.insert(FALLBACK_KEY.to_string(), FieldValue::from(true));
                structured_data.insert(ERROR_KEY.to_string(), FieldValue::from(err.to_string()));
                structured_data
                    .insert(LENGTH_CHARS_KEY.to_string(), FieldValue::from(document.char_count()));
                Ok(ExtractionResult {
                    document_id: document.id.clone(),
                    structured_data,
                    raw_text: document.content.clone(),
                })
            }
        }
    }
}

// ============================================================================
// SECTION: Analysis Fallback
// ============================================================================

/// Analysis adapter returning an empty analysis on failure.
#[derive(Debug, Clone, Default)]
pub struct FallbackAnalysis<S> {
    /// Wrapped stage.
    inner: S,
}

impl<S> FallbackAnalysis<S> {
    /// Wraps an analysis stage.
    #[must_use]
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
        }
    }
}

impl<S: AnalysisStage> AnalysisStage for FallbackAnalysis<S> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn analyze(&self, extraction: &ExtractionResult) -> Result<AnalysisResult, StageError> {
        match self.inner.analyze(extraction) {
            Ok(result) => Ok(result),
            Err(err) => Ok(AnalysisResult {
                document_id: extraction.document_id.clone(),
                findings: FieldMap::new(),
                risks: Vec::new(),
                comments: format!("{ANALYSIS_UNAVAILABLE_PREFIX}{err}"),
            }),
        }
    }
}
