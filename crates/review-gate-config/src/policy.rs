// crates/review-gate-config/src/policy.rs
// ============================================================================
// Module: Policy Files
// Description: Loading standalone policy documents.
// Purpose: Let callers review against a policy kept outside review-gate.toml.
// Dependencies: review-gate-core, serde_json, toml
// ============================================================================

//! ## Overview
//! A policy file holds a single [`Policy`] as JSON (`.json`) or TOML (any
//! other extension). The same size and encoding limits as the main config
//! apply, and the policy must pass [`Policy::validate`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;

use review_gate_core::Policy;

use crate::config::ConfigError;
use crate::config::read_limited_utf8;

// ============================================================================
// SECTION: Loading
// ============================================================================

/// Loads and validates a policy file.
///
/// # Errors
///
/// Returns [`ConfigError`] when the file cannot be read or parsed, or the
/// policy is invalid.
pub fn load_policy(path: &Path) -> Result<Policy, ConfigError> {
    let content = read_limited_utf8(path)?;
    let is_json =
        path.extension().is_some_and(|extension| extension.eq_ignore_ascii_case("json"));
    let policy: Policy = if is_json {
        serde_json::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))?
    } else {
        toml::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))?
    };
    policy.validate().map_err(|err| ConfigError::Invalid(format!("policy: {err}")))?;
    Ok(policy)
}
