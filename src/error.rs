//! Custom error types for Cashpilot
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Cashpilot operations
#[derive(Error, Debug)]
pub enum CashpilotError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Store errors (lock poisoning and other internal failures)
    #[error("Store error: {0}")]
    Store(String),
}

impl CashpilotError {
    /// Create a "not found" error for workflows.
    ///
    /// Workflow completion is the only by-id command that reports a
    /// missing target; the removal commands treat an unknown id as a
    /// silent no-op instead.
    pub fn workflow_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Workflow",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<serde_json::Error> for CashpilotError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Cashpilot operations
pub type CashpilotResult<T> = Result<T, CashpilotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CashpilotError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = CashpilotError::workflow_not_found("wkf-12345678");
        assert_eq!(err.to_string(), "Workflow not found: wkf-12345678");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_validation_error() {
        let err = CashpilotError::Validation("Title cannot be empty".into());
        assert_eq!(err.to_string(), "Validation error: Title cannot be empty");
        assert!(err.is_validation());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_from_serde_error() {
        let serde_err = serde_json::from_str::<i64>("not a number").unwrap_err();
        let err: CashpilotError = serde_err.into();
        assert!(matches!(err, CashpilotError::Json(_)));
        assert!(err.to_string().starts_with("JSON error: "));
    }
}
