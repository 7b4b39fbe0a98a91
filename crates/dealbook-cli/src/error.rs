//! CLI error types.

use dealbook_engine::EngineError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Invalid month format.
    #[error("Invalid month: {0}. Use YYYY-MM.")]
    InvalidMonth(String),

    /// The data feed could not be read.
    #[error("Cannot read data feed {path}: {source}")]
    DataFile {
        /// Path that was read.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Error from the deal engine.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
