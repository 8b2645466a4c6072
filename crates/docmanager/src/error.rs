//! Error types for docmanager.
//!
//! This module defines all error types used throughout the docmanager crate.
//! Request-level errors fall into three kinds (validation, not found, and
//! unexpected); the HTTP layer maps each kind to a status code.

use thiserror::Error;

/// The main error type for docmanager operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Validation Errors ===
    /// A required field was absent or empty.
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// A creation date did not match the `YYYY-MM-DD` format.
    #[error("invalid creation date '{value}': {source}")]
    InvalidDate {
        /// The text that failed to parse.
        value: String,
        /// The underlying parse error.
        #[source]
        source: chrono::ParseError,
    },

    // === Lookup Errors ===
    /// No document exists for the given number.
    #[error("document not found: {number}")]
    NotFound {
        /// The document number that was looked up.
        number: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Server Errors ===
    /// Failed to bind the HTTP listener.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// The address that could not be bound.
        addr: String,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === I/O Errors ===
    /// File system or socket operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Request Errors ===
    /// The request body could not be read, e.g. it exceeded the size limit.
    #[error("unreadable request body: {0}")]
    RequestBody(String),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for docmanager operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Create a not-found error for a document number.
    #[must_use]
    pub fn not_found(number: impl Into<String>) -> Self {
        Self::NotFound {
            number: number.into(),
        }
    }

    /// Check if this error is caused by bad caller input.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingField { .. } | Self::InvalidDate { .. })
    }

    /// Check if this error indicates a missing document.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_date(value: &str) -> Error {
        let source = chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap_err();
        Error::InvalidDate {
            value: value.to_string(),
            source,
        }
    }

    #[test]
    fn test_missing_field_display() {
        let err = Error::MissingField { field: "summary" };
        assert_eq!(err.to_string(), "missing required field: summary");
    }

    #[test]
    fn test_invalid_date_display() {
        let msg = invalid_date("2024-13-45").to_string();
        assert!(msg.contains("2024-13-45"));
    }

    #[test]
    fn test_not_found_display() {
        let err = Error::not_found("DOC-7");
        assert_eq!(err.to_string(), "document not found: DOC-7");
    }

    #[test]
    fn test_is_validation() {
        assert!(Error::MissingField { field: "number" }.is_validation());
        assert!(invalid_date("15/01/2024").is_validation());
        assert!(!Error::not_found("x").is_validation());
        assert!(!Error::internal("boom").is_validation());
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::not_found("x").is_not_found());
        assert!(!Error::MissingField { field: "number" }.is_not_found());
    }

    #[test]
    fn test_internal_error() {
        let err = Error::internal("something went wrong");
        assert_eq!(err.to_string(), "internal error: something went wrong");
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "port must be greater than 0".to_string(),
        };
        assert!(err.to_string().contains("port must be greater than 0"));
    }

    #[test]
    fn test_bind_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err = Error::Bind {
            addr: "127.0.0.1:5000".to_string(),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("127.0.0.1:5000"));
        assert!(msg.contains("address in use"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }
}
