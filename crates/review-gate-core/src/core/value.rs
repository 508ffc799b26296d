// crates/review-gate-core/src/core/value.rs
// ============================================================================
// Module: Review Gate Field Values
// Description: Typed open key-value payloads for metadata, findings, and context.
// Purpose: Pass arbitrary collaborator output through the core without dynamic typing.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Stage collaborators return open mappings whose keys are defined only by
//! convention. [`FieldValue`] is a closed tagged union over the scalar and
//! nested shapes those mappings may hold, serialized untagged so the wire form
//! is plain JSON. [`FieldMap`] keeps keys ordered for deterministic audit
//! output and hashing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Field Map
// ============================================================================

/// Ordered open mapping from string keys to [`FieldValue`] entries.
pub type FieldMap = BTreeMap<String, FieldValue>;

// ============================================================================
// SECTION: Field Value
// ============================================================================

/// Scalar or nested value held in an open mapping.
///
/// # Invariants
/// - Serializes untagged; variant order resolves JSON numbers to `Integer`
///   before `Number`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Explicit absence of a value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed integer value.
    Integer(i64),
    /// Floating point value.
    Number(f64),
    /// UTF-8 text value.
    Text(String),
    /// Ordered list of values.
    List(Vec<FieldValue>),
    /// Nested mapping.
    Map(FieldMap),
}

impl FieldValue {
    /// Returns the value as a float when it is numeric.
    #[must_use]
    #[allow(clippy::cast_precision_loss, reason = "Convention fields are small counts.")]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the value as a string slice when it is text.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns true for [`FieldValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<usize> for FieldValue {
    #[allow(clippy::cast_precision_loss, reason = "Only reached for counts above i64::MAX.")]
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Number(value as f64), Self::Integer)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<Vec<Self>> for FieldValue {
    fn from(value: Vec<Self>) -> Self {
        Self::List(value)
    }
}

impl From<FieldMap> for FieldValue {
    fn from(value: FieldMap) -> Self {
        Self::Map(value)
    }
}
