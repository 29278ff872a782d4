//! Custom error types for findash
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for findash operations
#[derive(Error, Debug)]
pub enum FindashError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl FindashError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FindashError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_yaml::Error> for FindashError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for findash operations
pub type FindashResult<T> = Result<T, FindashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FindashError::Config("missing config dir".into());
        assert_eq!(err.to_string(), "Configuration error: missing config dir");
    }

    #[test]
    fn test_validation_check() {
        let err = FindashError::Validation("amount must be positive".into());
        assert!(err.is_validation());
        assert!(!FindashError::Export("disk full".into()).is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FindashError = io_err.into();
        assert!(matches!(err, FindashError::Io(_)));
    }
}
