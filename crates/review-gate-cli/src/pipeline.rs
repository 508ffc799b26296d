// crates/review-gate-cli/src/pipeline.rs
// ============================================================================
// Module: Pipeline Wiring
// Description: Builds the configured stages and audit sink for a review.
// Purpose: Map review-gate.toml settings onto an orchestrator run.
// Dependencies: review-gate-{audit, config, core, stages}, thiserror
// ============================================================================

//! ## Overview
//! A review always uses the heuristic extractor and analyst. When
//! `stages.fallback` is set both are wrapped in fallback adapters, so a stage
//! failure becomes a fail-closed rejection instead of an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;

use review_gate_audit::JsonLinesAuditSink;
use review_gate_audit::NoopAuditSink;
use review_gate_audit::StderrAuditSink;
use review_gate_config::AuditConfig;
use review_gate_config::AuditSinkKind;
use review_gate_config::ReviewGateConfig;
use review_gate_core::AnalysisStage;
use review_gate_core::AuditError;
use review_gate_core::AuditSink;
use review_gate_core::DecisionOutcome;
use review_gate_core::DecisionStatus;
use review_gate_core::Document;
use review_gate_core::ExtractionStage;
use review_gate_core::Orchestrator;
use review_gate_core::OrchestratorError;
use review_gate_core::Policy;
use review_gate_stages::FallbackAnalysis;
use review_gate_stages::FallbackExtraction;
use review_gate_stages::HeuristicAnalyst;
use review_gate_stages::HeuristicExtractor;
use thiserror::Error;

// ============================================================================
// SECTION: Exit Codes
// ============================================================================

/// Exit code for an approved document.
pub const EXIT_APPROVED: u8 = 0;
/// Exit code for any error.
pub const EXIT_ERROR: u8 = 1;
/// Exit code for a rejected document.
pub const EXIT_REJECTED: u8 = 2;

/// Returns the process exit code for a decision status.
#[must_use]
pub const fn exit_code_for(status: DecisionStatus) -> u8 {
    match status {
        DecisionStatus::Approved => EXIT_APPROVED,
        DecisionStatus::Rejected => EXIT_REJECTED,
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Pipeline errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The audit sink could not be opened.
    #[error("failed to open audit sink: {0}")]
    AuditSetup(AuditError),
    /// The review run failed.
    #[error(transparent)]
    Run(#[from] OrchestratorError),
}

// ============================================================================
// SECTION: Wiring
// ============================================================================

/// Opens the audit sink selected by configuration.
///
/// # Errors
///
/// Returns [`AuditError`] when the file sink cannot be opened.
pub fn open_audit_sink(config: &AuditConfig) -> Result<Box<dyn AuditSink>, AuditError> {
    match config.sink {
        AuditSinkKind::File => Ok(Box::new(JsonLinesAuditSink::open(Path::new(&config.path))?)),
        AuditSinkKind::Stderr => Ok(Box::new(StderrAuditSink)),
        AuditSinkKind::None => Ok(Box::new(NoopAuditSink)),
    }
}

/// Reviews a document with the configured stages and audit sink.
///
/// # Errors
///
/// Returns [`PipelineError`] when the sink cannot be opened or the run fails.
pub fn review(
    document: Document,
    policy: &Policy,
    config: &ReviewGateConfig,
) -> Result<DecisionOutcome, PipelineError> {
    let sink = open_audit_sink(&config.audit).map_err(PipelineError::AuditSetup)?;
    let analyst = HeuristicAnalyst::new(config.stages.analyst_config());
    let decision = if config.stages.fallback {
        run_with(
            FallbackExtraction::new(HeuristicExtractor),
            FallbackAnalysis::new(analyst),
            sink,
            document,
            policy,
        )?
    } else {
        run_with(HeuristicExtractor, analyst, sink, document, policy)?
    };
    Ok(decision)
}

/// Runs one review over concrete stage types.
fn run_with<E, A>(
    extractor: E,
    analyst: A,
    sink: Box<dyn AuditSink>,
    document: Document,
    policy: &Policy,
) -> Result<DecisionOutcome, OrchestratorError>
where
    E: ExtractionStage,
    A: AnalysisStage,
{
    Orchestrator::new(extractor, analyst, sink).run(document, policy)
}
