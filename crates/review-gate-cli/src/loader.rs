// crates/review-gate-cli/src/loader.rs
// ============================================================================
// Module: Document Loader
// Description: Size-limited loading of review documents from disk.
// Purpose: Turn JSON or plain-text files into core documents.
// Dependencies: review-gate-core, serde_json, thiserror
// ============================================================================

//! ## Overview
//! `.json` files hold a serialized [`Document`]. Every other extension is
//! read as UTF-8 text; the document id is the file stem and the metadata
//! records where the text came from. PDF input is rejected because no text
//! extraction backend is bundled.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use review_gate_core::Document;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum size of a document input in bytes.
pub const MAX_DOCUMENT_BYTES: usize = 16 * 1024 * 1024;
/// File type recorded for plain-text documents.
pub const TEXT_FILE_TYPE: &str = "txt";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Document loading errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The file could not be read.
    #[error("failed to read {path}: {error}")]
    Io {
        /// Path being read.
        path: String,
        /// Underlying error text.
        error: String,
    },
    /// The file exceeds the size limit.
    #[error("document is {size} bytes, exceeding the {limit} byte limit")]
    TooLarge {
        /// Actual size in bytes.
        size: u64,
        /// Limit in bytes.
        limit: usize,
    },
    /// Text content is not UTF-8.
    #[error("document must be utf-8")]
    Encoding,
    /// JSON content is not a valid document.
    #[error("invalid document json: {0}")]
    Parse(String),
    /// The file type has no loader.
    #[error("unsupported document type: {0}")]
    Unsupported(String),
    /// The path has no usable file name.
    #[error("document path has no file name: {0}")]
    InvalidPath(String),
}

// ============================================================================
// SECTION: Loading
// ============================================================================

/// Loads a document from disk.
///
/// # Errors
///
/// Returns [`LoaderError`] when the file cannot be read, exceeds
/// [`MAX_DOCUMENT_BYTES`], is not UTF-8, or has an unsupported type.
pub fn load_document(path: &Path) -> Result<Document, LoaderError> {
    let extension =
        path.extension().map(|ext| ext.to_string_lossy().to_ascii_lowercase()).unwrap_or_default();
    if extension == "pdf" {
        return Err(LoaderError::Unsupported(extension));
    }

    let bytes = read_bytes_with_limit(path, MAX_DOCUMENT_BYTES)?;
    if extension == "json" {
        return serde_json::from_slice(&bytes).map_err(|err| LoaderError::Parse(err.to_string()));
    }

    let content = String::from_utf8(bytes).map_err(|_| LoaderError::Encoding)?;
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| LoaderError::InvalidPath(path.display().to_string()))?;
    let file_name =
        path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
    let source_path = fs::canonicalize(path)
        .map_or_else(|_| path.display().to_string(), |absolute| absolute.display().to_string());

    Ok(Document::new(stem.clone(), content)
        .with_metadata("title", stem)
        .with_metadata("source_path", source_path)
        .with_metadata("file_name", file_name)
        .with_metadata("file_type", TEXT_FILE_TYPE))
}

/// Reads a file while enforcing a hard size limit.
pub(crate) fn read_bytes_with_limit(path: &Path, max_bytes: usize) -> Result<Vec<u8>, LoaderError> {
    let io_error = |err: std::io::Error| LoaderError::Io {
        path: path.display().to_string(),
        error: err.to_string(),
    };
    let file = File::open(path).map_err(io_error)?;
    let size = file.metadata().map_err(io_error)?.len();
    let limit = u64::try_from(max_bytes).unwrap_or(u64::MAX);
    if size > limit {
        return Err(LoaderError::TooLarge {
            size,
            limit: max_bytes,
        });
    }

    let mut limited = file.take(limit.saturating_add(1));
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes).map_err(io_error)?;
    if bytes.len() > max_bytes {
        return Err(LoaderError::TooLarge {
            size: u64::try_from(bytes.len()).unwrap_or(u64::MAX),
            limit: max_bytes,
        });
    }
    Ok(bytes)
}
