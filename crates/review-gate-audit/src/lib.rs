// crates/review-gate-audit/src/lib.rs
// ============================================================================
// Module: Review Gate Audit
// Description: JSON-lines audit sinks for run snapshots and decisions.
// Purpose: Persist the Review Gate audit trail without a logging framework.
// Dependencies: review-gate-core, serde, serde_json
// ============================================================================

//! ## Overview
//! This crate provides [`AuditSink`](review_gate_core::AuditSink)
//! implementations that write one JSON object per line. Every line is an
//! [`AuditEnvelope`]: the core [`AuditRecord`](review_gate_core::AuditRecord)
//! flattened next to a `timestamp_ms` stamped when the line is written.
//! Invariants:
//! - Sinks never drop a record silently; write failures surface as
//!   [`AuditError`](review_gate_core::AuditError).
//! - Each line is flushed before the call returns.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod envelope;
pub mod sinks;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use envelope::AuditEnvelope;
pub use envelope::encode_line;
pub use sinks::JsonLinesAuditSink;
pub use sinks::NoopAuditSink;
pub use sinks::StderrAuditSink;
