//! Error types for loottally.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the pipeline and the binary
//!   - [`InputError`] - Log or value table file could not be read
//!   - [`MetricsError`] - The log never started a session, so no report exists
//!   - [`ConfigError`] - Config file exists but is unreadable or invalid
//!   - [`LoggingError`] - Tracing subscriber could not be installed
//!
//! # Error Recovery Strategy
//!
//! Malformed lines are **non-fatal**: a bad timestamp, amount token or value
//! table row is reported to the diagnostic sink and skipped. These never
//! become an error value. Everything in this module is fatal and stops the
//! run before any report is printed.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```no_run
/// use loottally::model::error::{AppError, InputError};
///
/// fn run() -> Result<(), AppError> {
///     // InputError converts to AppError via From
///     read_values()?;
///     Ok(())
/// }
/// # fn read_values() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read one of the input files.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// The log contained no kill and no session start marker.
    #[error("Cannot compute session metrics: {0}")]
    Metrics(#[from] MetricsError),

    /// Configuration file could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// JSON rendering of the report failed.
    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

/// Errors encountered when reading an input file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use loottally::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing-Log.txt")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing-Log.txt"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Any other I/O failure (permissions, invalid UTF-8, disk errors).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from deriving session metrics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    /// No kill and no session start marker was observed, so the session has
    /// no start time and no duration.
    ///
    /// ```
    /// use loottally::model::error::MetricsError;
    ///
    /// let msg = MetricsError::NoSessionObserved.to_string();
    /// assert!(msg.contains("no kills"));
    /// ```
    #[error("no kills or session start marker found in log")]
    NoSessionObserved,
}
