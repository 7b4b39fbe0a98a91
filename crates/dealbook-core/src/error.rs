//! Error types for the Dealbook core crate.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while constructing core values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Invalid or unparseable calendar date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A value outside its allowed domain.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// The field that was rejected.
        field: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_date("2025-02-30");
        assert_eq!(err.to_string(), "Invalid date: 2025-02-30");

        let err = CoreError::invalid_value("month", "must be 1-12");
        assert!(err.to_string().contains("month"));
        assert!(err.to_string().contains("must be 1-12"));
    }
}
