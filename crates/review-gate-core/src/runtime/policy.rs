// crates/review-gate-core/src/runtime/policy.rs
// ============================================================================
// Module: Review Gate Policy Engine
// Description: Deterministic policy evaluation over verification results.
// Purpose: Turn a verification result into an approve/reject decision with reasons.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Policy evaluation is a pure function. Each rule is checked independently
//! and contributes its reason in a fixed order:
//! 1. verification marked the output invalid;
//! 2. confidence is below the policy minimum;
//! 3. issues are present that the policy does not allow.
//!
//! Any reason rejects the document. With no reasons the document is approved
//! with a single synthetic reason.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::core::DecisionStatus;
use crate::core::Policy;
use crate::core::VerificationResult;

// ============================================================================
// SECTION: Reasons
// ============================================================================

/// Reason emitted when verification marked the output invalid.
pub const REASON_INVALID: &str = "Verification marked output as invalid.";
/// Reason emitted when every policy check passes.
pub const REASON_ALL_PASSED: &str = "All policy checks passed.";

// ============================================================================
// SECTION: Control Decision
// ============================================================================

/// Policy evaluation output.
///
/// # Invariants
/// - `reasons` is never empty.
/// - `status` is [`DecisionStatus::Approved`] only with the single reason
///   [`REASON_ALL_PASSED`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlDecision {
    /// Decision status.
    pub status: DecisionStatus,
    /// Reasons in rule order.
    pub reasons: Vec<String>,
}

// ============================================================================
// SECTION: Policy Engine
// ============================================================================

/// Stateless policy evaluator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolicyEngine;

impl PolicyEngine {
    /// Creates a policy engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates a policy against a verification result.
    #[must_use]
    #[allow(clippy::unused_self, reason = "Method form keeps call sites stable if the engine gains settings.")]
    pub fn evaluate(&self, policy: &Policy, verification: &VerificationResult) -> ControlDecision {
        let mut reasons = Vec::new();

        if !verification.is_valid {
            reasons.push(REASON_INVALID.to_string());
        }

        // NaN on either side counts as below the minimum.
        if !matches!(
            verification.confidence.partial_cmp(&policy.min_confidence),
            Some(Ordering::Equal | Ordering::Greater)
        ) {
            reasons.push(format!(
                "Confidence {:.2} is below policy minimum {:.2}.",
                verification.confidence, policy.min_confidence
            ));
        }

        let disallowed: Vec<&str> = verification
            .issues
            .iter()
            .map(String::as_str)
            .filter(|issue| !policy.allows(issue))
            .collect();
        if !disallowed.is_empty() {
            reasons.push(format!("Disallowed issues present: {}.", disallowed.join(", ")));
        }

        if reasons.is_empty() {
            ControlDecision {
                status: DecisionStatus::Approved,
                reasons: vec![REASON_ALL_PASSED.to_string()],
            }
        } else {
            ControlDecision {
                status: DecisionStatus::Rejected,
                reasons,
            }
        }
    }
}
