//! Reference-data error types.
//!
//! Structured errors for snapshot loading and validation. All errors carry
//! context (file paths, offending headings) to support debugging bad
//! regulatory data in production.

use std::path::PathBuf;

use thiserror::Error;

use tracehub_core::ComplianceScheme;

/// Errors that can occur during reference-data operations.
#[derive(Debug, Error)]
pub enum RefdataError {
    /// A required snapshot file was not found.
    #[error("snapshot file not found: {path}")]
    FileNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// YAML parsing failed.
    #[error("failed to parse YAML at {path}: {source}")]
    YamlParse {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying parser error.
        source: serde_yaml::Error,
    },

    /// JSON parsing failed.
    #[error("failed to parse JSON at {path}: {source}")]
    JsonParse {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying parser error.
        source: serde_json::Error,
    },

    /// The snapshot file extension is not a supported format.
    #[error("unsupported snapshot format at {path} (expected .yaml, .yml, or .json)")]
    UnsupportedExtension {
        /// The offending path.
        path: PathBuf,
    },

    /// A heading entry is not a well-formed 4-digit HS heading.
    #[error("invalid heading {heading:?} in snapshot: {reason}")]
    InvalidHeading {
        /// The offending heading string.
        heading: String,
        /// Why it was rejected.
        reason: String,
    },

    /// One heading is claimed by two different schemes.
    ///
    /// The EUDR and horn/hoof sets are disjoint by regulation; a snapshot
    /// that maps one heading to both is corrupt and must be rejected before
    /// any classification runs against it.
    #[error("heading {heading} claimed by both {first} and {second}")]
    SchemeOverlap {
        /// The heading appearing under two schemes.
        heading: String,
        /// The scheme seen first.
        first: ComplianceScheme,
        /// The conflicting scheme.
        second: ComplianceScheme,
    },

    /// The snapshot contains no heading entries.
    #[error("snapshot {snapshot_id:?} contains no heading entries")]
    EmptySnapshot {
        /// The snapshot identifier.
        snapshot_id: String,
    },

    /// The snapshot format version is not the one this build understands.
    #[error("unsupported snapshot format version {actual:?} (expected {expected:?})")]
    FormatVersionMismatch {
        /// The version this build supports.
        expected: String,
        /// The version declared in the file.
        actual: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic serde_json error (not file-specific).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for reference-data operations.
pub type RefdataResult<T> = Result<T, RefdataError>;
