//! Error types for the deal engine.
//!
//! The filter, grouping, metric and aggregation functions are total and never
//! return these. Errors only come from the edges: record construction, feed
//! loading, configuration and the alert acknowledgement command.

use dealbook_core::error::CoreError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while building or loading deal data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// A record failed validation.
    #[error("Invalid record '{id}': {reason}")]
    InvalidRecord {
        /// The record ID.
        id: String,
        /// The reason the record is invalid.
        reason: String,
    },

    /// Equity stake outside 0-100.
    #[error("Equity stake for '{id}' must be between 0 and 100, got {value}")]
    EquityOutOfRange {
        /// The record ID.
        id: String,
        /// The rejected stake.
        value: String,
    },

    /// Two records in one collection share an ID.
    #[error("Duplicate {collection} id '{id}'")]
    DuplicateId {
        /// Which collection the clash was found in.
        collection: String,
        /// The repeated ID.
        id: String,
    },

    /// No record carries the requested ID.
    #[error("No record with id '{id}'")]
    RecordNotFound {
        /// The ID that was looked up.
        id: String,
    },

    /// A label that is not part of its fixed vocabulary.
    #[error("Unknown {vocabulary} '{label}'")]
    UnknownLabel {
        /// The vocabulary name (e.g. "deal status").
        vocabulary: String,
        /// The rejected label.
        label: String,
    },

    /// The data feed could not be parsed.
    #[error("Invalid data feed: {reason}")]
    InvalidFeed {
        /// Parser or validation message.
        reason: String,
    },

    /// The configuration could not be loaded.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Parser or validation message.
        reason: String,
    },

    /// Error from a core value type.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl EngineError {
    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid record error.
    #[must_use]
    pub fn invalid_record(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create a record not found error.
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::RecordNotFound { id: id.into() }
    }

    /// Create an unknown label error.
    #[must_use]
    pub fn unknown_label(vocabulary: impl Into<String>, label: impl Into<String>) -> Self {
        Self::UnknownLabel {
            vocabulary: vocabulary.into(),
            label: label.into(),
        }
    }

    /// Create an invalid feed error.
    #[must_use]
    pub fn invalid_feed(reason: impl Into<String>) -> Self {
        Self::InvalidFeed {
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::missing_field("partner_name");
        assert!(err.to_string().contains("partner_name"));

        let err = EngineError::invalid_record("JV-001", "negative investment");
        assert!(err.to_string().contains("JV-001"));
        assert!(err.to_string().contains("negative investment"));

        let err = EngineError::unknown_label("deal status", "Paused");
        assert_eq!(err.to_string(), "Unknown deal status 'Paused'");
    }

    #[test]
    fn test_core_error_converts() {
        let err: EngineError = CoreError::invalid_date("2025-02-30").into();
        assert!(matches!(err, EngineError::Core(_)));
        assert!(err.to_string().contains("2025-02-30"));
    }
}
