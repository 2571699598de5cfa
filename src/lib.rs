//! Loot Tally (loottally)
//!
//! Session economics from game client text logs: platinum earned, items
//! looted, waste from destroyed loot and rates per hour and per kill.
//!
//! Pipeline: [`parser`] classifies each line, [`model::SessionAccumulator`]
//! folds events into a [`model::SessionState`], [`model::SessionMetrics`]
//! derives rates once the log is exhausted, and [`view`] renders the report.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod view;
