//! Tracing subscriber initialization and diagnostic sinks.
//!
//! Logs are written to a file so the report on stdout stays clean.
//! Users can follow diagnostics with `tail -f` on the log file.

pub mod sink;

pub use sink::{DiagnosticSink, MemorySink, TracingSink};

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid log file path (no filename component)
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Filter directive used when neither `LOOTTALLY_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "loottally=info";

const ENV_FILTER: &str = "LOOTTALLY_LOG";

/// Initialize the tracing subscriber, appending to `log_path`.
///
/// The filter comes from `LOOTTALLY_LOG`, then `RUST_LOG`, then
/// [`DEFAULT_FILTER`]. The log directory is created if missing.
///
/// # Errors
///
/// Returns `LoggingError` if the path has no file name, the directory could
/// not be created, or a subscriber is already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    let (directory, file_name) = split_log_path(log_path)?;

    std::fs::create_dir_all(&directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.clone(),
        source,
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter_directive())
        .with_writer(tracing_appender::rolling::never(directory, file_name))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

/// Split a log path into its directory and file name.
///
/// A bare file name logs into the working directory.
fn split_log_path(log_path: &Path) -> Result<(PathBuf, &str), LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((directory, file_name))
}

fn filter_directive() -> String {
    [ENV_FILTER, "RUST_LOG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}
