//! Report rendering.
//!
//! Pure functions from a [`SessionReport`] to the text printed on stdout.

pub mod report;

pub use report::render_text;

use crate::model::SessionReport;
use serde::Deserialize;

/// Output format for the session report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable sections.
    #[default]
    Text,
    /// Pretty printed JSON of the full report.
    Json,
}

/// Render the report as pretty printed JSON.
///
/// # Errors
///
/// Returns the serializer error if serialization fails.
pub fn render_json(report: &SessionReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Render the report in the requested format, newline terminated.
///
/// # Errors
///
/// Returns the serializer error if JSON serialization fails.
pub fn render(report: &SessionReport, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report).map(|json| json + "\n"),
    }
}
