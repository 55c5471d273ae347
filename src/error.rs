//! Error types for the pay engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the error conditions that can occur while loading a rate schedule
//! or calculating pay.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the pay engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use guard_pay_engine::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::InvalidRange {
///     start_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid date range: end date 2024-03-01 is before start date 2024-03-10"
/// );
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

    /// A rate schedule parsed cleanly but breaks a structural rule.
    #[error("Invalid rate schedule: {message}")]
    InvalidSchedule {
        /// A description of the rule that was broken.
        message: String,
    },

    /// The end of the requested date range falls before its start.
    #[error("Invalid date range: end date {end_date} is before start date {start_date}")]
    InvalidRange {
        /// The requested start date.
        start_date: NaiveDate,
        /// The requested end date.
        end_date: NaiveDate,
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
