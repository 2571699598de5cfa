//! Classified log events.

use super::currency::CoinDrop;
use chrono::NaiveDateTime;

/// A log line payload after classification.
///
/// The timestamp is carried alongside the event rather than inside it, see
/// [`TimedEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEvent {
    /// Coins looted from a corpse. One line carries one or more drops.
    RawCurrencyDrop {
        /// Individual `<amount> <unit>` drops in the order they appeared.
        entries: Vec<CoinDrop>,
    },
    /// An item looted from a corpse.
    ItemLoot {
        /// Item name with the message wrapper removed.
        item_name: String,
    },
    /// Kill marker (the faction standing message emitted on every kill).
    Kill,
    /// Explicit marker to (re)start tracking a session.
    SessionStart,
    /// Any other payload. Ignored by the accumulator.
    Unrecognized,
}

/// A classified event paired with the timestamp of its log line.
pub type TimedEvent = (NaiveDateTime, LogEvent);
