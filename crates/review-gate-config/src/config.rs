// crates/review-gate-config/src/config.rs
// ============================================================================
// Module: Review Gate Configuration
// Description: Configuration loading and validation for Review Gate.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: review-gate-core, review-gate-stages, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! The path comes from the caller, then [`CONFIG_ENV_VAR`], then
//! [`DEFAULT_CONFIG_NAME`] in the working directory. Only the working
//! directory default may be absent, in which case defaults apply. Every
//! other failure is an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use review_gate_core::Policy;
use review_gate_core::PolicyId;
use review_gate_stages::DEFAULT_LONG_DOCUMENT_CHARS;
use review_gate_stages::HeuristicAnalystConfig;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "review-gate.toml";
/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "REVIEW_GATE_CONFIG";
/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Default audit log path.
pub const DEFAULT_AUDIT_PATH: &str = "audit_log.jsonl";
/// Default minimum verification confidence.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.75;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Review Gate configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewGateConfig {
    /// Audit sink configuration.
    #[serde(default)]
    pub audit: AuditConfig,
    /// Default policy applied when no policy file is given.
    #[serde(default)]
    pub policy: PolicyConfig,
    /// Heuristic stage configuration.
    #[serde(default)]
    pub stages: StagesConfig,
}

impl ReviewGateConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (resolved, source) = resolve_path(path)?;
        validate_path(&resolved)?;
        if source == ConfigSource::WorkingDirectory && !resolved.exists() {
            return Ok(Self::default());
        }
        let content = read_limited_utf8(&resolved)?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.audit.validate()?;
        self.policy.validate()?;
        self.stages.validate()?;
        Ok(())
    }
}

/// Audit sink selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditSinkKind {
    /// Append JSON lines to a file.
    #[default]
    File,
    /// Write JSON lines to stderr.
    Stderr,
    /// Discard audit records.
    None,
}

/// Audit sink configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Sink kind.
    #[serde(default)]
    pub sink: AuditSinkKind,
    /// Audit log path for the file sink.
    #[serde(default = "default_audit_path")]
    pub path: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            sink: AuditSinkKind::default(),
            path: default_audit_path(),
        }
    }
}

impl AuditConfig {
    /// Validates audit configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        match self.sink {
            AuditSinkKind::File => validate_path_string("audit.path", &self.path),
            AuditSinkKind::Stderr | AuditSinkKind::None => Ok(()),
        }
    }
}

/// Default policy configuration.
///
/// # Invariants
/// - Converts into a [`Policy`] that passes [`Policy::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Policy identifier.
    #[serde(default = "default_policy_id")]
    pub id: String,
    /// Policy display name.
    #[serde(default = "default_policy_name")]
    pub name: String,
    /// Policy description.
    #[serde(default = "default_policy_description")]
    pub description: String,
    /// Minimum verification confidence.
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,
    /// Issue codes tolerated by the policy.
    #[serde(default = "default_allowed_risks")]
    pub allowed_risks: Vec<String>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            id: default_policy_id(),
            name: default_policy_name(),
            description: default_policy_description(),
            min_confidence: default_min_confidence(),
            allowed_risks: default_allowed_risks(),
        }
    }
}

impl PolicyConfig {
    /// Builds the policy described by this configuration.
    #[must_use]
    pub fn to_policy(&self) -> Policy {
        Policy {
            id: PolicyId::new(self.id.clone()),
            name: self.name.clone(),
            description: self.description.clone(),
            min_confidence: self.min_confidence,
            allowed_risks: self.allowed_risks.iter().cloned().collect::<BTreeSet<_>>(),
        }
    }

    /// Validates policy configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        self.to_policy().validate().map_err(|err| ConfigError::Invalid(format!("policy: {err}")))
    }
}

/// Heuristic stage configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagesConfig {
    /// Character count above which a document is long.
    #[serde(default = "default_long_document_chars")]
    pub long_document_chars: u32,
    /// Wrap stages in fallback adapters.
    #[serde(default = "default_fallback")]
    pub fallback: bool,
}

impl Default for StagesConfig {
    fn default() -> Self {
        Self {
            long_document_chars: default_long_document_chars(),
            fallback: default_fallback(),
        }
    }
}

impl StagesConfig {
    /// Returns the heuristic analyst settings.
    #[must_use]
    pub const fn analyst_config(&self) -> HeuristicAnalystConfig {
        HeuristicAnalystConfig {
            long_document_chars: self.long_document_chars,
        }
    }

    /// Validates stage configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.long_document_chars == 0 {
            return Err(ConfigError::Invalid(
                "stages.long_document_chars must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Where a configuration path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigSource {
    /// Caller supplied the path.
    Explicit,
    /// Path came from [`CONFIG_ENV_VAR`].
    Environment,
    /// Path is [`DEFAULT_CONFIG_NAME`] in the working directory.
    WorkingDirectory,
}

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<(PathBuf, ConfigSource), ConfigError> {
    if let Some(path) = path {
        return Ok((path.to_path_buf(), ConfigSource::Explicit));
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok((PathBuf::from(env_path), ConfigSource::Environment));
    }
    Ok((PathBuf::from(DEFAULT_CONFIG_NAME), ConfigSource::WorkingDirectory))
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        let component_value = component.as_os_str().to_string_lossy();
        if component_value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

/// Reads a file as UTF-8 text, enforcing [`MAX_CONFIG_FILE_SIZE`].
///
/// # Errors
///
/// Returns [`ConfigError`] when the file cannot be read, is too large, or is
/// not UTF-8.
pub fn read_limited_utf8(path: &Path) -> Result<String, ConfigError> {
    let bytes = fs::read(path).map_err(|err| ConfigError::Io(format!("{}: {err}", path.display())))?;
    if bytes.len() > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
    }
    String::from_utf8(bytes)
        .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))
}

/// Default audit log path.
fn default_audit_path() -> String {
    DEFAULT_AUDIT_PATH.to_string()
}

/// Default policy identifier.
fn default_policy_id() -> String {
    "policy-default".to_string()
}

/// Default policy name.
fn default_policy_name() -> String {
    "Default Enterprise Policy".to_string()
}

/// Default policy description.
fn default_policy_description() -> String {
    "Baseline constraints for document review.".to_string()
}

/// Default minimum confidence.
const fn default_min_confidence() -> f64 {
    DEFAULT_MIN_CONFIDENCE
}

/// Default allowed issue codes.
fn default_allowed_risks() -> Vec<String> {
    vec!["RISK_LOW_LENGTH_WARNING".to_string()]
}

/// Default long-document threshold.
const fn default_long_document_chars() -> u32 {
    DEFAULT_LONG_DOCUMENT_CHARS
}

/// Fallback adapters are on by default.
const fn default_fallback() -> bool {
    true
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only assertions are permitted."
    )]

    use std::path::Path;

    use super::MAX_PATH_COMPONENT_LENGTH;
    use super::MAX_TOTAL_PATH_LENGTH;
    use super::validate_path;
    use super::validate_path_string;

    #[test]
    fn validate_path_string_accepts_valid_path() {
        assert!(validate_path_string("audit.path", "./logs/audit.jsonl").is_ok());
    }

    #[test]
    fn validate_path_string_rejects_whitespace_only() {
        let result = validate_path_string("audit.path", "   ");
        assert!(result.unwrap_err().to_string().contains("non-empty"));
    }

    #[test]
    fn validate_path_string_rejects_long_component() {
        let long = "a".repeat(MAX_PATH_COMPONENT_LENGTH + 1);
        let result = validate_path_string("audit.path", &format!("logs/{long}"));
        assert!(result.unwrap_err().to_string().contains("component too long"));
    }

    #[test]
    fn validate_path_rejects_total_length() {
        let long = "a/".repeat(MAX_TOTAL_PATH_LENGTH / 2 + 1);
        assert!(validate_path(Path::new(&long)).is_err());
    }
}
