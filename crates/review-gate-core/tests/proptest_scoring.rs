// crates/review-gate-core/tests/proptest_scoring.rs
// ============================================================================
// Module: Scoring Property-Based Tests
// Description: Property tests for scorer bounds and policy determinism.
// Purpose: Detect invariant violations across wide input ranges.
// ============================================================================

//! Property-based tests for scoring and policy invariants.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use std::collections::BTreeSet;

use proptest::prelude::*;
use review_gate_core::AnalysisResult;
use review_gate_core::DecisionStatus;
use review_gate_core::DocumentId;
use review_gate_core::FieldMap;
use review_gate_core::FieldValue;
use review_gate_core::Policy;
use review_gate_core::PolicyEngine;
use review_gate_core::PolicyId;
use review_gate_core::RiskLabel;
use review_gate_core::VerificationResult;
use review_gate_core::runtime::policy::REASON_ALL_PASSED;
use review_gate_core::runtime::policy::REASON_INVALID;
use review_gate_core::runtime::scorer::COMMENTS_TOO_SHORT;
use review_gate_core::runtime::scorer::EMPTY_FINDINGS;
use review_gate_core::runtime::scorer::confidence_for;
use review_gate_core::score;

fn analysis_strategy() -> impl Strategy<Value = AnalysisResult> {
    (
        prop::collection::btree_map("[a-z]{1,6}", any::<i64>(), 0 .. 4),
        prop::collection::vec("(LOW|MEDIUM|HIGH|CRITICAL|odd)_[A-Z]{1,6}", 0 .. 12),
        ".{0,40}",
    )
        .prop_map(|(findings, risks, comments)| AnalysisResult {
            document_id: DocumentId::new("doc-prop"),
            findings: findings
                .into_iter()
                .map(|(key, value)| (key, FieldValue::from(value)))
                .collect::<FieldMap>(),
            risks: risks.into_iter().map(RiskLabel::parse).collect(),
            comments,
        })
}

fn verification_strategy() -> impl Strategy<Value = VerificationResult> {
    (
        0.0_f64 ..= 1.0,
        prop::collection::vec("[A-Z_]{1,10}", 0 .. 6),
        any::<bool>(),
    )
        .prop_map(|(confidence, issues, is_valid)| VerificationResult {
            document_id: DocumentId::new("doc-prop"),
            confidence,
            issues,
            is_valid,
        })
}

fn policy_with(min_confidence: f64, allowed: BTreeSet<String>) -> Policy {
    Policy {
        id: PolicyId::new("policy-prop"),
        name: "Property Policy".to_string(),
        description: String::new(),
        min_confidence,
        allowed_risks: allowed,
    }
}

proptest! {
    #[test]
    fn confidence_stays_in_unit_interval(analysis in analysis_strategy()) {
        let result = score(&analysis);
        prop_assert!((0.0 ..= 1.0).contains(&result.confidence));
    }

    #[test]
    fn confidence_is_non_increasing_in_issue_count(count in 0_usize .. 64) {
        prop_assert!(confidence_for(count + 1) <= confidence_for(count));
        prop_assert!(confidence_for(count) >= 0.0);
    }

    #[test]
    fn empty_findings_are_always_invalid(
        risks in prop::collection::vec("LOW_[A-Z]{1,4}", 0 .. 4),
        comments in ".{0,40}",
    ) {
        let analysis = AnalysisResult {
            document_id: DocumentId::new("doc-prop"),
            findings: FieldMap::new(),
            risks: risks.into_iter().map(RiskLabel::parse).collect(),
            comments,
        };
        let result = score(&analysis);
        prop_assert!(result.issues.iter().any(|issue| issue == EMPTY_FINDINGS));
        prop_assert!(!result.is_valid);
    }

    #[test]
    fn short_comments_are_always_flagged(analysis in analysis_strategy()) {
        let result = score(&analysis);
        let short = analysis.comments.chars().count() < 20;
        prop_assert_eq!(result.issues.iter().any(|issue| issue == COMMENTS_TOO_SHORT), short);
    }

    #[test]
    fn every_risk_is_reported_once_in_order(analysis in analysis_strategy()) {
        let result = score(&analysis);
        let reported: Vec<String> =
            analysis.risks.iter().map(|risk| format!("RISK_{risk}")).collect();
        prop_assert_eq!(&result.issues[.. reported.len()], reported.as_slice());
    }

    #[test]
    fn policy_evaluation_is_deterministic(
        verification in verification_strategy(),
        min_confidence in 0.0_f64 ..= 1.0,
        allowed in prop::collection::btree_set("[A-Z_]{1,10}", 0 .. 4),
    ) {
        let policy = policy_with(min_confidence, allowed);
        let engine = PolicyEngine::new();
        prop_assert_eq!(engine.evaluate(&policy, &verification), engine.evaluate(&policy, &verification));
    }

    #[test]
    fn passing_checks_always_approve(
        issues in prop::collection::vec("[A-Z_]{1,10}", 0 .. 6),
        min_confidence in 0.0_f64 ..= 1.0,
        slack in 0.0_f64 ..= 1.0,
    ) {
        let confidence = min_confidence + (1.0 - min_confidence) * slack;
        let verification = VerificationResult {
            document_id: DocumentId::new("doc-prop"),
            confidence,
            issues: issues.clone(),
            is_valid: true,
        };
        let policy = policy_with(min_confidence, issues.into_iter().collect());
        let decision = PolicyEngine::new().evaluate(&policy, &verification);
        prop_assert_eq!(decision.status, DecisionStatus::Approved);
        prop_assert_eq!(decision.reasons, vec![REASON_ALL_PASSED.to_string()]);
    }

    #[test]
    fn invalid_verification_always_rejects(verification in verification_strategy()) {
        let verification = VerificationResult { is_valid: false, ..verification };
        let policy = policy_with(0.0, verification.issues.iter().cloned().collect());
        let decision = PolicyEngine::new().evaluate(&policy, &verification);
        prop_assert_eq!(decision.status, DecisionStatus::Rejected);
        prop_assert!(decision.reasons.iter().any(|reason| reason == REASON_INVALID));
    }
}
