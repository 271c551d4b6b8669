//! Error types for the wage engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition the engine can report.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the wage engine.
///
/// The pure calculators only fail on inputs outside their documented domain
/// (negative wages, malformed times); the remaining variants come from
/// configuration loading and import reconciliation.
///
/// # Example
///
/// ```
/// use wage_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/payroll.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/payroll.yaml");
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

    /// No rate schedule is effective on the requested date.
    #[error("No rate table effective on {date}")]
    RateNotFound {
        /// The date for which rates were requested.
        date: NaiveDate,
    },

    /// A rate table contained an out-of-range value.
    #[error("Invalid rate table field '{field}': {message}")]
    InvalidRateTable {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A break policy contained an out-of-range value.
    #[error("Invalid break policy field '{field}': {message}")]
    InvalidBreakPolicy {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A time-of-day value could not be parsed.
    #[error("Invalid time '{value}': {message}")]
    InvalidTime {
        /// The raw value that was supplied.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// A wage input field was outside its valid domain.
    #[error("Invalid wage field '{field}': {message}")]
    InvalidWage {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An imported pay record disagreed with the recomputed figures.
    #[error("Imported pay record does not match recomputed values: {}", .fields.join(", "))]
    ImportMismatch {
        /// Names of the fields whose imported value differs.
        fields: Vec<String>,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
