//! Cross-field validation tests for review-gate-config.
// crates/review-gate-config/tests/config_validation.rs
// =============================================================================
// Module: Config Validation Tests
// Description: Validate fail-closed rejection of invalid settings.
// Purpose: Ensure invalid policy, audit, and stage settings are rejected.
// =============================================================================

mod common;

use common::TestResult;
use common::assert_invalid;
use common::config_from_toml;

#[test]
fn file_sink_requires_path() -> TestResult {
    assert_invalid(config_from_toml("[audit]\nsink = \"file\"\npath = \"  \"\n"), "audit.path must be non-empty")
}

#[test]
fn min_confidence_above_one_is_rejected() -> TestResult {
    assert_invalid(config_from_toml("[policy]\nmin_confidence = 1.5\n"), "min_confidence")
}

#[test]
fn negative_min_confidence_is_rejected() -> TestResult {
    assert_invalid(config_from_toml("[policy]\nmin_confidence = -0.1\n"), "min_confidence")
}

#[test]
fn nan_min_confidence_is_rejected() -> TestResult {
    assert_invalid(config_from_toml("[policy]\nmin_confidence = nan\n"), "min_confidence")
}

#[test]
fn empty_policy_id_is_rejected() -> TestResult {
    assert_invalid(config_from_toml("[policy]\nid = \" \"\n"), "policy id must be non-empty")
}

#[test]
fn empty_allowed_risk_is_rejected() -> TestResult {
    assert_invalid(config_from_toml("[policy]\nallowed_risks = [\"\"]\n"), "allowed_risks")
}

#[test]
fn zero_length_threshold_is_rejected() -> TestResult {
    assert_invalid(
        config_from_toml("[stages]\nlong_document_chars = 0\n"),
        "stages.long_document_chars must be greater than zero",
    )
}

#[test]
fn negative_length_threshold_fails_to_parse() -> TestResult {
    assert_invalid(config_from_toml("[stages]\nlong_document_chars = -5\n"), "parse")
}

#[test]
fn boundary_confidences_are_accepted() -> TestResult {
    for value in ["0.0", "1.0"] {
        config_from_toml(&format!("[policy]\nmin_confidence = {value}\n"))
            .map_err(|err| err.to_string())?;
    }
    Ok(())
}
