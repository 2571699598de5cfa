//! Domain model types.
//!
//! Currency, classified events, the session accumulator and the metrics
//! derived from it. Everything here is pure; file access lives in
//! [`crate::source`].

pub mod currency;
pub mod error;
pub mod event;
pub mod metrics;
pub mod report;
pub mod session;
pub mod values;

// Re-export for convenience
pub use currency::{add_plat, CoinDrop, Denomination, UnknownDenomination};
pub use error::{AppError, InputError, MetricsError};
pub use event::{LogEvent, TimedEvent};
pub use metrics::SessionMetrics;
pub use report::SessionReport;
pub use session::{
    DestroyPolicy, SessionAccumulator, SessionState, FINE_STEEL_AVERAGE_VALUE, FINE_STEEL_PREFIX,
};
pub use values::ValueTable;
