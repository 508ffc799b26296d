// crates/review-gate-core/src/core/document.rs
// ============================================================================
// Module: Review Gate Documents
// Description: Normalized document representation handed to the pipeline.
// Purpose: Define the immutable input produced by external document loaders.
// Dependencies: crate::core::{identifiers, value}, serde
// ============================================================================

//! ## Overview
//! A [`Document`] is produced once by an external loader and never mutated by
//! the core. The orchestrator reads only `title` and `file_type` from its
//! metadata, and only to annotate the audit context.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::DocumentId;
use crate::core::value::FieldMap;
use crate::core::value::FieldValue;

// ============================================================================
// SECTION: Document
// ============================================================================

/// Normalized document submitted for review.
///
/// # Invariants
/// - Immutable once created; the core only borrows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Stable document identifier.
    pub id: DocumentId,
    /// Raw document text.
    pub content: String,
    /// Loader-provided metadata.
    #[serde(default)]
    pub metadata: FieldMap,
}

impl Document {
    /// Creates a document with empty metadata.
    #[must_use]
    pub fn new(id: impl Into<DocumentId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            metadata: FieldMap::new(),
        }
    }

    /// Adds a metadata entry and returns the document.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Returns a metadata entry by key.
    #[must_use]
    pub fn metadata_value(&self, key: &str) -> Option<&FieldValue> {
        self.metadata.get(key)
    }

    /// Returns the content length in characters.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}
