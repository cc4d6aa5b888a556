//! Custom error types for taxnet
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for taxnet operations
#[derive(Error, Debug)]
pub enum TaxnetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File and console I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A console entry that could not be parsed
    #[error("Invalid {field}: '{value}'")]
    InvalidInput { field: &'static str, value: String },

    /// Standard input closed while a prompt was waiting
    #[error("Input ended unexpectedly")]
    EndOfInput,

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl TaxnetError {
    /// Create an "invalid input" error for a prompt field
    pub fn invalid_input(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            value: value.into(),
        }
    }

    /// Check if this is an input parse error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Check if standard input has been exhausted
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }
}

impl From<std::io::Error> for TaxnetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TaxnetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for taxnet operations
pub type TaxnetResult<T> = Result<T, TaxnetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TaxnetError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_input_error() {
        let err = TaxnetError::invalid_input("amount", "abc");
        assert_eq!(err.to_string(), "Invalid amount: 'abc'");
        assert!(err.is_invalid_input());
        assert!(!err.is_end_of_input());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: TaxnetError = io_err.into();
        assert!(matches!(err, TaxnetError::Io(_)));
    }
}
