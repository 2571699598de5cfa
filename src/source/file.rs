//! File-based session log source.
//!
//! Reads the log front to back in one pass, classifying and applying each
//! line as it is read so the whole file never has to be held in memory.

use crate::logging::DiagnosticSink;
use crate::model::error::InputError;
use crate::model::{DestroyPolicy, SessionAccumulator, SessionState, ValueTable};
use crate::parser;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a session log and return the terminal session state.
///
/// Lines are applied in file order. Malformed lines are reported to `sink`
/// and skipped. Bytes that are not valid UTF-8 are replaced with U+FFFD, so
/// a line in a foreign encoding never stops the read.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::Io` for other I/O errors.
pub fn read_log(
    path: &Path,
    values: &ValueTable,
    policy: DestroyPolicy,
    sink: &dyn DiagnosticSink,
) -> Result<SessionState, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = BufReader::new(File::open(path)?);
    let mut accumulator = SessionAccumulator::new(values, policy);
    let mut buf = Vec::new();
    let mut line_count = 0usize;
    let mut lossy_lines = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_count += 1;

        let raw = strip_line_ending(&buf);
        let line = String::from_utf8_lossy(raw);
        if matches!(line, Cow::Owned(_)) {
            lossy_lines += 1;
        }
        if let Some((timestamp, event)) = parser::classify(&line, sink) {
            accumulator.apply(&event, timestamp);
        }
    }

    if lossy_lines > 0 {
        tracing::warn!(lines = lossy_lines, "Log contained invalid UTF-8, bytes replaced");
    }

    let state = accumulator.finish();
    tracing::info!(
        path = %path.display(),
        lines = line_count,
        kills = state.kills_observed,
        "Read session log"
    );
    Ok(state)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
