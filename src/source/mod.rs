//! Input sources and the analysis pipeline.
//!
//! - [`ValueTable`] loading for the item value file
//! - [`read_log`] for single-pass reading of the session log
//! - [`analyze_files`] wiring both into a finished [`SessionReport`]

use crate::logging::DiagnosticSink;
use crate::model::{
    AppError, DestroyPolicy, SessionAccumulator, SessionReport, SessionState, ValueTable,
};
use crate::parser;
use std::path::Path;

pub mod file;

pub use file::read_log;

/// Run in-memory log lines through the classifier and accumulator.
pub fn analyze_lines<'a, I>(
    lines: I,
    values: &ValueTable,
    policy: DestroyPolicy,
    sink: &dyn DiagnosticSink,
) -> SessionState
where
    I: IntoIterator<Item = &'a str>,
{
    let mut accumulator = SessionAccumulator::new(values, policy);
    for line in lines {
        if let Some((timestamp, event)) = parser::classify(line, sink) {
            accumulator.apply(&event, timestamp);
        }
    }
    accumulator.finish()
}

/// Full pipeline: load the value table, read the log, derive metrics.
///
/// # Errors
///
/// Returns `AppError::Input` if either file is missing or unreadable and
/// `AppError::Metrics` if the log never started a session.
pub fn analyze_files(
    log_path: &Path,
    values_path: &Path,
    policy: DestroyPolicy,
    sink: &dyn DiagnosticSink,
) -> Result<SessionReport, AppError> {
    let values = ValueTable::load(values_path, sink)?;
    let state = read_log(log_path, &values, policy, sink)?;
    Ok(SessionReport::new(state, &values)?)
}
