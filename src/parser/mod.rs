//! Line classifier for game client text logs.
//!
//! Each log line has the shape `[Mon Jan 01 00:00:01 2024] payload`. This
//! module provides pure functions that split the timestamp from the payload
//! and classify the payload by fixed literal prefixes and suffixes.
//!
//! Parsing is best effort: foreign or malformed lines are skipped, and
//! problems are reported to the [`DiagnosticSink`] rather than returned.

use crate::logging::DiagnosticSink;
use crate::model::{CoinDrop, Denomination, LogEvent, TimedEvent};
use chrono::NaiveDateTime;
use tracing::Level;

/// Timestamp layout inside the leading brackets.
pub const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

// Payload markers, matched case-sensitively
const COIN_PREFIX: &str = "You receive";
const COIN_SUFFIX: &str = "from the corpse.";
const KILL_PREFIX: &str = "Your faction standing with Vox";
const SESSION_START_PREFIX: &str = "sessionstart is not online at this time";
const LOOT_PREFIX: &str = "--You have looted a ";
/// Characters after the item name (`.--`).
const LOOT_SUFFIX_LEN: usize = 3;

const SEGMENT_SEPARATOR: &str = "and";

/// Classify one raw log line.
///
/// Returns `None` for lines without a `]` delimiter, with an empty
/// timestamp, or with a timestamp that does not parse (the latter is
/// reported as a warning). Every other line yields an event, possibly
/// [`LogEvent::Unrecognized`]. Never panics.
pub fn classify(raw: &str, sink: &dyn DiagnosticSink) -> Option<TimedEvent> {
    let (timestamp, payload) = split_line(raw)?;

    let timestamp = match NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT) {
        Ok(ts) => ts,
        Err(e) => {
            sink.report(
                Level::WARN,
                &format!("Failed to parse timestamp {:?}: {}", timestamp, e),
            );
            return None;
        }
    };

    Some((timestamp, classify_payload(payload, sink)))
}

/// Split a raw line into its timestamp text and trimmed payload.
///
/// The timestamp is everything before the first `]`, without the opening
/// bracket. Returns `None` when there is no `]` or the timestamp is blank.
pub fn split_line(raw: &str) -> Option<(&str, &str)> {
    let (head, payload) = raw.split_once(']')?;
    let head = head.trim();
    let timestamp = head.strip_prefix('[').unwrap_or(head).trim();

    if timestamp.is_empty() {
        return None;
    }

    Some((timestamp, payload.trim()))
}

/// Classify an already trimmed payload.
pub fn classify_payload(payload: &str, sink: &dyn DiagnosticSink) -> LogEvent {
    if payload.starts_with(COIN_PREFIX) && payload.ends_with(COIN_SUFFIX) {
        LogEvent::RawCurrencyDrop {
            entries: parse_coin_drops(payload, sink),
        }
    } else if payload.starts_with(KILL_PREFIX) {
        LogEvent::Kill
    } else if payload.starts_with(SESSION_START_PREFIX) {
        LogEvent::SessionStart
    } else if payload.starts_with(LOOT_PREFIX) {
        match parse_item_name(payload) {
            Some(item_name) => LogEvent::ItemLoot { item_name },
            None => LogEvent::Unrecognized,
        }
    } else {
        LogEvent::Unrecognized
    }
}

/// Parse every coin drop out of a `You receive ... from the corpse.` payload.
///
/// The body is split on the word `and` into segments, each segment is a
/// comma separated list of `<amount> <unit>` drops.
fn parse_coin_drops(payload: &str, sink: &dyn DiagnosticSink) -> Vec<CoinDrop> {
    let body = payload.strip_prefix(COIN_PREFIX).unwrap_or(payload);
    let body = body.strip_suffix(COIN_SUFFIX).unwrap_or(body).trim();

    split_segments(body)
        .iter()
        .flat_map(|segment| segment.split(','))
        .map(str::trim)
        .filter(|drop| !drop.is_empty())
        .filter_map(|drop| parse_coin_drop(drop, sink))
        .collect()
}

/// Split on `and` when it stands alone as a word.
fn split_segments(body: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in body.split_whitespace() {
        if word == SEGMENT_SEPARATOR {
            segments.push(current.join(" "));
            current.clear();
        } else {
            current.push(word);
        }
    }
    segments.push(current.join(" "));

    segments.retain(|segment| !segment.is_empty());
    segments
}

/// Parse one `<amount> <unit>` drop.
///
/// A bad amount is reported and counted as zero. A missing or unknown unit
/// is reported and the drop is skipped.
fn parse_coin_drop(drop: &str, sink: &dyn DiagnosticSink) -> Option<CoinDrop> {
    let mut tokens = drop.split_whitespace();
    let raw_amount = tokens.next()?;

    let amount = match raw_amount.parse::<i64>() {
        Ok(amount) => amount,
        Err(_) => {
            sink.report(
                Level::ERROR,
                &format!("Failed to parse raw plat value {}", raw_amount),
            );
            0
        }
    };

    let Some(raw_unit) = tokens.next() else {
        sink.report(
            Level::ERROR,
            &format!("Missing currency unit in drop {:?}", drop),
        );
        return None;
    };

    match raw_unit.parse::<Denomination>() {
        Ok(denomination) => Some(CoinDrop::new(amount, denomination)),
        Err(e) => {
            sink.report(Level::ERROR, &e.to_string());
            None
        }
    }
}

/// Extract the item name from a `--You have looted a <name>.--` payload.
///
/// Drops the fixed prefix and the last three characters, then trims.
fn parse_item_name(payload: &str) -> Option<String> {
    let rest = payload.strip_prefix(LOOT_PREFIX)?;
    let cut = rest
        .char_indices()
        .rev()
        .nth(LOOT_SUFFIX_LEN - 1)
        .map(|(index, _)| index)?;
    let name = rest[..cut].trim();

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
