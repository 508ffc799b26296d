// crates/review-gate-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for review-gate-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::fs;
use std::path::PathBuf;

use review_gate_config::ConfigError;
use review_gate_config::ReviewGateConfig;
use tempfile::TempDir;

/// Result type for tests that report failures as strings.
pub type TestResult = Result<(), String>;

/// Parses and validates a TOML string.
pub fn config_from_toml(toml_str: &str) -> Result<ReviewGateConfig, ConfigError> {
    ReviewGateConfig::from_toml_str(toml_str)
}

/// Returns a config with all defaults applied.
pub fn minimal_config() -> Result<ReviewGateConfig, ConfigError> {
    config_from_toml("")
}

/// Writes a file into a fresh temp directory and returns both.
pub fn write_temp(name: &str, contents: &[u8]) -> Result<(TempDir, PathBuf), String> {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join(name);
    fs::write(&path, contents).map_err(|err| err.to_string())?;
    Ok((dir, path))
}

/// Checks that a result is an error whose message contains `needle`.
pub fn assert_invalid<T>(result: Result<T, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}
