// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for operator and superoperator construction.
//!
//! Every public operation validates its inputs before doing any arithmetic,
//! so an `Err` always means nothing was computed.

use thiserror::Error;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Library error types.
#[derive(Debug, Error)]
pub enum Error {
    /// A matrix or vector has the wrong shape for the requested operation.
    #[error("Dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: String,
        expected: String,
        actual: String,
    },

    /// An argument failed validation (index range, list lengths, domains).
    #[error("Invalid argument to {context}: {message}")]
    InvalidArgument { context: String, message: String },

    /// A linear solve hit a singular pivot.
    #[error("Singular matrix encountered in {context}")]
    Singular { context: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Shorthand for [`Error::DimensionMismatch`].
    pub fn dimension(
        context: impl Into<String>,
        expected: impl ToString,
        actual: impl ToString,
    ) -> Self {
        Error::DimensionMismatch {
            context: context.into(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Shorthand for [`Error::InvalidArgument`].
    pub fn invalid(context: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            context: context.into(),
            message: message.into(),
        }
    }

    /// True for the two input-validation kinds (shape and argument errors).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::DimensionMismatch { .. } | Error::InvalidArgument { .. }
        )
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    // =========================================================================
    // Display
    // =========================================================================

    #[test]
    fn test_error_display_dimension_mismatch() {
        let e = Error::dimension("partial_trace", "4 x 4", "3 x 3");
        assert_eq!(
            e.to_string(),
            "Dimension mismatch in partial_trace: expected 4 x 4, got 3 x 3"
        );
    }

    #[test]
    fn test_error_display_invalid_argument() {
        let e = Error::invalid("lindbladian_superop", "2 jump operators but 1 rate");
        assert_eq!(
            e.to_string(),
            "Invalid argument to lindbladian_superop: 2 jump operators but 1 rate"
        );
    }

    #[test]
    fn test_error_display_singular() {
        let e = Error::Singular {
            context: "matrix_exp".into(),
        };
        assert_eq!(e.to_string(), "Singular matrix encountered in matrix_exp");
    }

    #[test]
    fn test_error_display_config() {
        let e = Error::Config("zero_tolerance must be > 0".into());
        assert_eq!(
            e.to_string(),
            "Configuration error: zero_tolerance must be > 0"
        );
    }

    #[test]
    fn test_error_display_io() {
        let e = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(e.to_string(), "IO error: gone");
    }

    // =========================================================================
    // Classification and sources
    // =========================================================================

    #[test]
    fn test_is_validation() {
        assert!(Error::dimension("x", 1, 2).is_validation());
        assert!(Error::invalid("x", "y").is_validation());
        assert!(!Error::Config("x".into()).is_validation());
        assert!(!Error::Singular {
            context: "x".into()
        }
        .is_validation());
    }

    #[test]
    fn test_error_source_io() {
        let e = Error::Io(std::io::Error::other("disk"));
        assert!(e.source().is_some());
    }

    #[test]
    fn test_error_source_none_for_validation() {
        assert!(Error::invalid("x", "y").source().is_none());
    }

    // =========================================================================
    // From impls
    // =========================================================================

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let e: Error = io_err.into();
        assert!(matches!(e, Error::Io(_)));
    }

    #[test]
    fn test_from_serde_yaml_error() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("{{{{").unwrap_err();
        let e: Error = yaml_err.into();
        assert!(matches!(e, Error::Serialization(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{bad}").unwrap_err();
        let e: Error = json_err.into();
        assert!(matches!(e, Error::Serialization(_)));
    }
}
