//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten decimal digits.
    InvalidPhone(String),

    /// The provided birthday is not a `DD.MM.YYYY` calendar date.
    InvalidDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(_) => {
                write!(f, "The phone number should contain 10 numeric characters")
            }
            Self::InvalidDate(_) => write!(f, "Invalid date format. Use DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::InvalidDate("32.01.2020".to_string()).to_string(),
            "Invalid date format. Use DD.MM.YYYY"
        );
        assert_eq!(
            ValidationError::InvalidPhone("12".to_string()).to_string(),
            "The phone number should contain 10 numeric characters"
        );
    }
}
