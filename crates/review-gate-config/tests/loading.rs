//! File loading tests for review-gate-config.
// crates/review-gate-config/tests/loading.rs
// =============================================================================
// Module: Config Loading Tests
// Description: Validate file limits and policy file loading.
// Purpose: Ensure untrusted files are bounded and parsed fail-closed.
// =============================================================================

use review_gate_config::AuditSinkKind;
use review_gate_config::ConfigError;
use review_gate_config::MAX_CONFIG_FILE_SIZE;
use review_gate_config::ReviewGateConfig;
use review_gate_config::load_policy;

mod common;

use common::TestResult;
use common::assert_invalid;
use common::write_temp;

#[test]
fn loads_explicit_config_file() -> TestResult {
    let (_dir, path) = write_temp("review-gate.toml", b"[audit]\nsink = \"none\"\n")?;
    let config = ReviewGateConfig::load(Some(&path)).map_err(|err| err.to_string())?;
    if config.audit.sink != AuditSinkKind::None {
        return Err("explicit config not applied".to_string());
    }
    Ok(())
}

#[test]
fn missing_explicit_config_is_an_io_error() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("absent.toml");
    match ReviewGateConfig::load(Some(&path)) {
        Err(ConfigError::Io(_)) => Ok(()),
        Err(other) => Err(format!("expected io error, got {other}")),
        Ok(_) => Err("expected io error, got a config".to_string()),
    }
}

#[test]
fn oversized_config_is_rejected() -> TestResult {
    let mut contents = b"# padding\n".to_vec();
    contents.resize(MAX_CONFIG_FILE_SIZE + 1, b'#');
    let (_dir, path) = write_temp("big.toml", &contents)?;
    assert_invalid(ReviewGateConfig::load(Some(&path)), "size limit")
}

#[test]
fn non_utf8_config_is_rejected() -> TestResult {
    let (_dir, path) = write_temp("bad.toml", &[0xff, 0xfe, 0x00])?;
    assert_invalid(ReviewGateConfig::load(Some(&path)), "utf-8")
}

#[test]
fn invalid_toml_is_a_parse_error() -> TestResult {
    let (_dir, path) = write_temp("broken.toml", b"[policy\n")?;
    match ReviewGateConfig::load(Some(&path)) {
        Err(ConfigError::Parse(_)) => Ok(()),
        Err(other) => Err(format!("expected parse error, got {other}")),
        Ok(_) => Err("expected parse error, got a config".to_string()),
    }
}

#[test]
fn loads_toml_policy_file() -> TestResult {
    let (_dir, path) = write_temp(
        "policy.toml",
        b"id = \"strict\"\nname = \"Strict\"\nmin_confidence = 0.85\nallowed_risks = []\n",
    )?;
    let policy = load_policy(&path).map_err(|err| err.to_string())?;
    if policy.id.as_str() != "strict" || !policy.allowed_risks.is_empty() {
        return Err(format!("unexpected policy {}", policy.id));
    }
    if !policy.description.is_empty() {
        return Err("description should default to empty".to_string());
    }
    Ok(())
}

#[test]
fn loads_json_policy_file() -> TestResult {
    let (_dir, path) = write_temp(
        "policy.JSON",
        br#"{"id":"lenient","name":"Lenient","min_confidence":0.5,"allowed_risks":["RISK_LOW_X"]}"#,
    )?;
    let policy = load_policy(&path).map_err(|err| err.to_string())?;
    if !policy.allows("RISK_LOW_X") {
        return Err("allowed risk not loaded".to_string());
    }
    Ok(())
}

#[test]
fn invalid_policy_file_is_rejected() -> TestResult {
    let (_dir, path) =
        write_temp("policy.toml", b"id = \"p\"\nname = \"P\"\nmin_confidence = 2.0\n")?;
    assert_invalid(load_policy(&path), "min_confidence")
}

#[test]
fn policy_file_requires_min_confidence() -> TestResult {
    let (_dir, path) = write_temp("policy.toml", b"id = \"p\"\nname = \"P\"\n")?;
    assert_invalid(load_policy(&path), "parse")
}
