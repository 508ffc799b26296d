// crates/review-gate-stages/src/extractor.rs
// ============================================================================
// Module: Heuristic Extractor
// Description: Extraction stage that derives basic structure from metadata.
// Purpose: Produce title and length fields without an external service.
// Dependencies: review-gate-core
// ============================================================================

//! ## Overview
//! The heuristic extractor copies the document title from metadata and counts
//! the characters of the content. It never fails.

// ============================================================================
// SECTION: Imports
// ============================================================================

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

/// Structured-data key for the document title.
pub const TITLE_KEY: &str = "title";
/// Title recorded when metadata carries none.
pub const UNKNOWN_TITLE: &str = "Unknown";

// ============================================================================
// SECTION: Extractor
// ============================================================================

/// Extraction stage reading title metadata and content length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeuristicExtractor;

impl ExtractionStage for HeuristicExtractor {
    fn extract(&self, document: &Document) -> Result<ExtractionResult, StageError> {
        let title = document
            .metadata_value(TITLE_KEY)
            .filter(|value| !value.is_null())
            .cloned()
            .unwrap_or_else(|| FieldValue::from(UNKNOWN_TITLE));

        let mut structured_data = FieldMap::new();
        structured_data.insert(TITLE_KEY.to_string(), title);
        structured_data.insert(LENGTH_CHARS_KEY.to_string(), FieldValue::from(document.char_count()));

        Ok(ExtractionResult {
            document_id: document.id.clone(),
            structured_data,
            raw_text: document.content.clone(),
        })
    }
}
