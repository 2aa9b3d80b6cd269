//! Custom error types for the checkbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for checkbook operations
#[derive(Error, Debug)]
pub enum CheckbookError {
    /// Stored content could not be parsed into an account
    #[error("Malformed account data: {0}")]
    MalformedData(String),

    /// Text that should have been a decimal amount
    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),

    /// Text that should have been a YYYY-MM-DD date
    #[error("Invalid date: '{0}' (expected YYYY-MM-DD or '.' for today)")]
    InvalidDate(String),

    /// Ledger index outside the visible transactions
    #[error("Transaction index {index} out of range (ledger has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Account file does not exist
    #[error("Account file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Account file exists and would be overwritten
    #[error("Account file already exists: {} (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CheckbookError {
    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this error came from user input that failed to parse
    pub fn is_input(&self) -> bool {
        matches!(self, Self::InvalidAmount(_) | Self::InvalidDate(_))
    }
}

impl From<std::io::Error> for CheckbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CheckbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedData(err.to_string())
    }
}

/// Result type alias for checkbook operations
pub type CheckbookResult<T> = Result<T, CheckbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CheckbookError::InvalidAmount("abc".into());
        assert_eq!(err.to_string(), "Invalid amount: 'abc'");
    }

    #[test]
    fn test_not_found_error() {
        let err = CheckbookError::NotFound(PathBuf::from("/tmp/missing.json"));
        assert_eq!(err.to_string(), "Account file not found: /tmp/missing.json");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_index_out_of_range_error() {
        let err = CheckbookError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "Transaction index 4 out of range (ledger has 2)"
        );
    }

    #[test]
    fn test_input_errors() {
        assert!(CheckbookError::InvalidDate("x".into()).is_input());
        assert!(!CheckbookError::Io("x".into()).is_input());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CheckbookError = io_err.into();
        assert!(matches!(err, CheckbookError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CheckbookError = json_err.into();
        assert!(matches!(err, CheckbookError::MalformedData(_)));
    }
}
