//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on records and the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A name, phone number or birthday failed validation
    #[error("{0}")]
    InvalidFormat(#[from] ValidationError),

    /// No record with this name exists
    #[error("Record {0} not found")]
    RecordNotFound(String),

    /// The record has no such phone number
    #[error("Phone number {0} not found")]
    PhoneNotFound(String),

    /// A record with this name already exists
    #[error("Record with name {0} already exists")]
    DuplicateName(String),
}

impl BookError {
    /// Whether the error refers to a missing record or phone number.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecordNotFound(_) | Self::PhoneNotFound(_))
    }
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the storage file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The storage file is not valid JSON or holds invalid fields
    #[error("Storage format error: {0}")]
    Json(#[from] serde_json::Error),

    /// The storage file parsed but violates an address book invariant
    #[error("Corrupt storage: {0}")]
    Corrupt(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::RecordNotFound("Alice".to_string());
        assert_eq!(err.to_string(), "Record Alice not found");

        let err = BookError::PhoneNotFound("0501234567".to_string());
        assert_eq!(err.to_string(), "Phone number 0501234567 not found");

        let err = BookError::DuplicateName("Bob".to_string());
        assert_eq!(err.to_string(), "Record with name Bob already exists");

        let err = ConfigError::InvalidValue {
            var: "BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be a non-negative number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for BIRTHDAY_WINDOW_DAYS: Must be a non-negative number"
        );
    }

    #[test]
    fn test_validation_error_converts_to_invalid_format() {
        let err: BookError = ValidationError::EmptyName.into();
        assert_eq!(err, BookError::InvalidFormat(ValidationError::EmptyName));
        assert_eq!(err.to_string(), "Contact name cannot be empty");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_is_not_found() {
        assert!(BookError::RecordNotFound("x".to_string()).is_not_found());
        assert!(BookError::PhoneNotFound("x".to_string()).is_not_found());
        assert!(!BookError::DuplicateName("x".to_string()).is_not_found());
    }
}
