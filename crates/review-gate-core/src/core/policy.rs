// crates/review-gate-core/src/core/policy.rs
// ============================================================================
// Module: Review Gate Policies
// Description: Caller-supplied acceptance policy definitions.
// Purpose: Describe the thresholds a verification result must meet for approval.
// Dependencies: crate::core::identifiers, serde, thiserror
// ============================================================================

//! ## Overview
//! A [`Policy`] is supplied by the caller and is immutable for the duration of
//! a run. Evaluation itself is total; [`Policy::validate`] exists for loaders
//! that want to reject malformed policies before any document is reviewed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::identifiers::PolicyId;

// ============================================================================
// SECTION: Policy
// ============================================================================

/// Acceptance policy evaluated against verification results.
///
/// # Invariants
/// - `allowed_risks` is a set; ordering carries no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    /// Policy identifier.
    pub id: PolicyId,
    /// Human-readable policy name.
    pub name: String,
    /// Policy description.
    #[serde(default)]
    pub description: String,
    /// Minimum verification confidence in `[0.0, 1.0]`.
    pub min_confidence: f64,
    /// Issue codes considered non-blocking.
    #[serde(default)]
    pub allowed_risks: BTreeSet<String>,
}

impl Policy {
    /// Returns true when the issue code is allowed by this policy.
    #[must_use]
    pub fn allows(&self, issue: &str) -> bool {
        self.allowed_risks.contains(issue)
    }

    /// Validates policy fields.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyValidationError`] when the identifier is empty or the
    /// confidence threshold is not a finite value in `[0.0, 1.0]`.
    pub fn validate(&self) -> Result<(), PolicyValidationError> {
        if self.id.as_str().trim().is_empty() {
            return Err(PolicyValidationError::EmptyId);
        }
        if !self.min_confidence.is_finite() || !(0.0 ..= 1.0).contains(&self.min_confidence) {
            return Err(PolicyValidationError::ConfidenceOutOfRange(self.min_confidence));
        }
        if self.allowed_risks.iter().any(|risk| risk.trim().is_empty()) {
            return Err(PolicyValidationError::EmptyAllowedRisk);
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Policy validation errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolicyValidationError {
    /// Policy identifier is empty.
    #[error("policy id must be non-empty")]
    EmptyId,
    /// Minimum confidence is outside `[0.0, 1.0]` or not finite.
    #[error("policy min_confidence must be within [0.0, 1.0], got {0}")]
    ConfidenceOutOfRange(f64),
    /// An allowed risk entry is empty.
    #[error("policy allowed_risks entries must be non-empty")]
    EmptyAllowedRisk,
}
