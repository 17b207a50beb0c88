//! Error types for the Salary Component Computation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during salary computation.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Salary Component Computation Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/salary.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/salary.yaml");
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

    /// The resolved component total exceeds the wage the structure is
    /// configured against.
    #[error("Total components ({total}) exceed wage ({wage})")]
    OverCommitted {
        /// The resolved component total, rounded to currency precision.
        total: Decimal,
        /// The wage the components were resolved against.
        wage: Decimal,
    },

    /// The supplied wage is not a usable monetary value.
    #[error("Invalid wage: {message}")]
    InvalidWage {
        /// A description of what made the wage invalid.
        message: String,
    },

    /// A calendar month outside 1..=12 was supplied.
    #[error("Invalid month: {month} (expected 1-12)")]
    InvalidMonth {
        /// The month value that was rejected.
        month: u32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
