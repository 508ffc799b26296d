// crates/review-gate-stages/tests/heuristics.rs
// ============================================================================
// Module: Heuristic Stage Tests
// Description: Tests for the heuristic extractor and analyst.
// ============================================================================
//! ## Overview
//! Validates title and length extraction plus the long-document threshold.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use review_gate_core::AnalysisStage;
use review_gate_core::Document;
use review_gate_core::DocumentId;
use review_gate_core::ExtractionResult;
use review_gate_core::ExtractionStage;
use review_gate_core::FieldMap;
use review_gate_core::FieldValue;
use review_gate_core::RiskSeverity;
use review_gate_stages::HeuristicAnalyst;
use review_gate_stages::HeuristicAnalystConfig;
use review_gate_stages::HeuristicExtractor;
use review_gate_stages::analyst::HEURISTIC_COMMENT;
use review_gate_stages::analyst::IS_LONG_DOCUMENT_KEY;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn extraction_with_length(length: Option<FieldValue>) -> ExtractionResult {
    let mut structured_data = FieldMap::new();
    if let Some(length) = length {
        structured_data.insert("length_chars".to_string(), length);
    }
    ExtractionResult {
        document_id: DocumentId::new("doc-1"),
        structured_data,
        raw_text: String::new(),
    }
}

fn analyst(threshold: u32) -> HeuristicAnalyst {
    HeuristicAnalyst::new(HeuristicAnalystConfig {
        long_document_chars: threshold,
    })
}

// ============================================================================
// SECTION: Extractor
// ============================================================================

#[test]
fn extractor_reads_title_and_counts_characters() {
    let document = Document::new("doc-1", "héllo").with_metadata("title", "Greeting");

    let result = HeuristicExtractor.extract(&document).unwrap();

    assert_eq!(result.document_id.as_str(), "doc-1");
    assert_eq!(result.structured_data.get("title"), Some(&FieldValue::from("Greeting")));
    assert_eq!(result.structured_data.get("length_chars"), Some(&FieldValue::Integer(5)));
    assert_eq!(result.raw_text, "héllo");
    assert_eq!(result.length_chars(), Some(5.0));
}

#[test]
fn extractor_defaults_missing_title_to_unknown() {
    let result = HeuristicExtractor.extract(&Document::new("doc-2", "")).unwrap();

    assert_eq!(result.structured_data.get("title"), Some(&FieldValue::from("Unknown")));
    assert_eq!(result.structured_data.get("length_chars"), Some(&FieldValue::Integer(0)));
    assert_eq!(HeuristicExtractor.name(), "extractor");
}

#[test]
fn extractor_treats_null_title_as_missing() {
    let document = Document::new("doc-3", "x").with_metadata("title", FieldValue::Null);

    let result = HeuristicExtractor.extract(&document).unwrap();

    assert_eq!(result.structured_data.get("title"), Some(&FieldValue::from("Unknown")));
}

// ============================================================================
// SECTION: Analyst
// ============================================================================

#[test]
fn short_document_has_no_risks() {
    let result =
        analyst(2000).analyze(&extraction_with_length(Some(FieldValue::Integer(2000)))).unwrap();

    assert_eq!(result.findings.get(IS_LONG_DOCUMENT_KEY), Some(&FieldValue::Bool(false)));
    assert!(result.risks.is_empty());
    assert_eq!(result.comments, HEURISTIC_COMMENT);
}

#[test]
fn long_document_reports_length_warning() {
    let result =
        analyst(2000).analyze(&extraction_with_length(Some(FieldValue::Integer(2001)))).unwrap();

    assert_eq!(result.findings.get(IS_LONG_DOCUMENT_KEY), Some(&FieldValue::Bool(true)));
    assert_eq!(result.risks.len(), 1);
    assert_eq!(result.risks[0].as_str(), "LOW_LENGTH_WARNING");
    assert_eq!(result.risks[0].severity(), RiskSeverity::Low);
}

#[test]
fn threshold_is_configurable() {
    let extraction = extraction_with_length(Some(FieldValue::Number(11.5)));

    assert_eq!(analyst(10).analyze(&extraction).unwrap().risks.len(), 1);
    assert!(analyst(12).analyze(&extraction).unwrap().risks.is_empty());
}

#[test]
fn missing_or_textual_length_counts_as_zero() {
    let missing = analyst(0).analyze(&extraction_with_length(None)).unwrap();
    assert_eq!(missing.findings.get(IS_LONG_DOCUMENT_KEY), Some(&FieldValue::Bool(false)));

    let textual =
        analyst(0).analyze(&extraction_with_length(Some(FieldValue::from("9999")))).unwrap();
    assert_eq!(textual.findings.get(IS_LONG_DOCUMENT_KEY), Some(&FieldValue::Bool(false)));
}

#[test]
fn default_threshold_is_two_thousand() {
    assert_eq!(HeuristicAnalyst::default().config().long_document_chars, 2000);
    assert_eq!(HeuristicAnalyst::default().name(), "analyst");
}
