//! Error types for the turnover analytics engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while ingesting and querying
//! employment records.

use thiserror::Error;

/// The main error type for the turnover analytics engine.
///
/// Every fallible operation in the engine returns this error type, so the
/// external request layer only has one enum to map onto client responses.
///
/// # Example
///
/// ```
/// use turnover_engine::error::EngineError;
///
/// let error = EngineError::UnsupportedChartType {
///     chart_type: "pie".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unsupported chart type: pie");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds values the engine cannot work with.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the offending value.
        message: String,
    },

    /// A raw row could not be normalized into an employment record.
    #[error("Invalid row {row} field '{field}': {message}")]
    Validation {
        /// The 1-based position of the row in the ingested batch.
        row: usize,
        /// The column that failed validation.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A query was issued before any dataset was ingested for the session.
    #[error("No data available for analysis")]
    NoDataAvailable,

    /// A chart was requested with a type the engine does not produce.
    #[error("Unsupported chart type: {chart_type}")]
    UnsupportedChartType {
        /// The chart type that was requested.
        chart_type: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
