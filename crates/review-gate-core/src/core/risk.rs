// crates/review-gate-core/src/core/risk.rs
// ============================================================================
// Module: Review Gate Risk Labels
// Description: Explicit severity-tagged risk labels parsed at the analysis boundary.
// Purpose: Replace the implicit `SEVERITY_REST` string convention with a typed form.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Analysis collaborators report risks as strings such as
//! `"CRITICAL_DATA_LEAK"`. The text before the first `_` names a severity.
//! [`RiskLabel`] parses that token into [`RiskSeverity`] and keeps the raw
//! string verbatim so issue codes round-trip exactly. Unknown or missing
//! severity tokens fall back to [`RiskSeverity::Low`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Severity
// ============================================================================

/// Risk severity parsed from the leading label token.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskSeverity {
    /// Low severity (also the default for unparseable labels).
    Low,
    /// Medium severity.
    Medium,
    /// High severity.
    High,
    /// Critical severity.
    Critical,
}

impl RiskSeverity {
    /// Parses a severity token, ignoring ASCII case.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "LOW" => Some(Self::Low),
            "MEDIUM" => Some(Self::Medium),
            "HIGH" => Some(Self::High),
            "CRITICAL" => Some(Self::Critical),
            _ => None,
        }
    }
}

// ============================================================================
// SECTION: Risk Label
// ============================================================================

/// Risk label reported by an analysis stage.
///
/// # Invariants
/// - `raw` is the label exactly as reported and is the wire form.
/// - `label` is the text after the first `_`, or all of `raw` when there is none.
/// - `severity` is [`RiskSeverity::Low`] when the leading token is not a known severity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RiskLabel {
    /// Label text as reported.
    raw: String,
    /// Parsed severity.
    severity: RiskSeverity,
    /// Label text after the severity token.
    label: String,
}

impl RiskLabel {
    /// Parses a risk label from its `SEVERITY_REST` wire form.
    #[must_use]
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let (severity, label) = match raw.split_once('_') {
            Some((token, rest)) => match RiskSeverity::from_token(token) {
                Some(severity) => (severity, rest.to_string()),
                None => (RiskSeverity::Low, raw.clone()),
            },
            None => (RiskSeverity::Low, raw.clone()),
        };
        Self {
            raw,
            severity,
            label,
        }
    }

    /// Returns the label exactly as reported.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed severity.
    #[must_use]
    pub const fn severity(&self) -> RiskSeverity {
        self.severity
    }

    /// Returns the label text after the severity token.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl From<String> for RiskLabel {
    fn from(value: String) -> Self {
        Self::parse(value)
    }
}

impl From<&str> for RiskLabel {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<RiskLabel> for String {
    fn from(value: RiskLabel) -> Self {
        value.raw
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.raw.fmt(f)
    }
}
