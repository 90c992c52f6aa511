//! # Error Hierarchy
//!
//! Structured error types for the TraceHub compliance workspace, built with
//! `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Classification itself never fails: malformed HS codes degrade to an
//! unregulated result. Errors here cover the surrounding machinery —
//! scheme parsing, reference-data validation (wrapped by the refdata
//! crate's own error type), and I/O at the tool boundary.

use thiserror::Error;

/// Top-level error type for TraceHub compliance tooling.
#[derive(Error, Debug)]
pub enum TracehubError {
    /// Domain primitive validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors for domain values.
///
/// These carry the invalid input so operators can diagnose bad reference
/// data or misconfiguration without guesswork.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A reference heading is not a well-formed 4-digit HS heading.
    #[error("invalid HS heading {value:?}: {reason}")]
    InvalidHeading {
        /// The offending heading string.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A scheme name does not match any known compliance scheme.
    #[error("unknown compliance scheme: {0:?} (expected \"eudr\" or \"horn_hoof\")")]
    UnknownScheme(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_heading_display() {
        let err = ValidationError::InvalidHeading {
            value: "18".to_string(),
            reason: "expected exactly 4 digits".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("18"));
        assert!(msg.contains("4 digits"));
    }

    #[test]
    fn unknown_scheme_display() {
        let err = ValidationError::UnknownScheme("gdpr".to_string());
        assert!(format!("{err}").contains("gdpr"));
    }

    #[test]
    fn tracehub_error_wraps_validation() {
        let err = TracehubError::from(ValidationError::UnknownScheme("x".to_string()));
        assert!(format!("{err}").contains("validation error"));
    }
}
