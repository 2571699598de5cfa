//! Diagnostic sinks.
//!
//! Parsing components never log through a global handle. They take a
//! `&dyn DiagnosticSink` and report malformed input through it, which lets
//! tests capture exactly what was reported.

use std::cell::RefCell;
use tracing::Level;

/// Receiver for diagnostics emitted while parsing input files.
///
/// Calls are synchronous and delivered in call order.
pub trait DiagnosticSink {
    /// Report a diagnostic message at the given level.
    fn report(&self, level: Level, message: &str);
}

/// Sink that forwards every diagnostic to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, level: Level, message: &str) {
        match level {
            Level::ERROR => tracing::error!("{message}"),
            Level::WARN => tracing::warn!("{message}"),
            Level::INFO => tracing::info!("{message}"),
            Level::DEBUG => tracing::debug!("{message}"),
            _ => tracing::trace!("{message}"),
        }
    }
}

/// Sink that keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: RefCell<Vec<(Level, String)>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded diagnostics in call order.
    pub fn records(&self) -> Vec<(Level, String)> {
        self.records.borrow().clone()
    }

    /// Number of diagnostics recorded at exactly `level`.
    pub fn count(&self, level: Level) -> usize {
        self.records
            .borrow()
            .iter()
            .filter(|(recorded, _)| *recorded == level)
            .count()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, level: Level, message: &str) {
        self.records.borrow_mut().push((level, message.to_string()));
    }
}
