//! Derived session metrics.
//!
//! Computed once from the terminal [`SessionState`]. Every ratio with a
//! zero denominator resolves to zero, so a session with no kills, no
//! coin loot or no elapsed time still yields a complete report. Sums and
//! products saturate at the `Decimal` bounds and a quotient too large to
//! represent resolves to zero, so extreme totals never abort the report.

use super::currency::add_plat;
use super::error::MetricsError;
use super::session::SessionState;
use chrono::TimeDelta;
use rust_decimal::Decimal;
use serde::Serialize;

const MILLIS_PER_MINUTE: i64 = 60_000;
const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Rates and percentages derived from a finished session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionMetrics {
    /// Time from session start to the last kill. Never negative.
    #[serde(serialize_with = "serialize_duration_secs")]
    pub session_duration: TimeDelta,
    /// Kept coins plus kept item value.
    pub accumulated_total_plat: Decimal,
    /// Total plat per hour of session time.
    pub plat_per_hour: Decimal,
    /// Destroyed Fine Steel value as a percentage of item value plus that waste.
    pub wasted_fine_steel_percentage: Decimal,
    /// Destroyed coin value as a percentage of item value plus that waste.
    pub wasted_raw_percentage: Decimal,
    /// Session minutes per kill.
    pub minutes_per_kill: Decimal,
    /// Total plat per kill.
    pub plat_per_kill: Decimal,
    /// Share of kept coin value that dropped as gold, in percent.
    pub gold_mix: Decimal,
}

impl SessionMetrics {
    /// Derive metrics from a finished session.
    ///
    /// # Errors
    ///
    /// Returns `MetricsError::NoSessionObserved` if the session never
    /// started (no kill and no session start marker in the log).
    pub fn derive(state: &SessionState) -> Result<Self, MetricsError> {
        let start = state.session_start.ok_or(MetricsError::NoSessionObserved)?;
        // A start marker after the last kill leaves the end behind the start
        let end = state.session_end.map_or(start, |end| end.max(start));
        let session_duration = end - start;

        let millis = Decimal::from(session_duration.num_milliseconds());
        let total_hours = millis / Decimal::from(MILLIS_PER_HOUR);
        let total_minutes = millis / Decimal::from(MILLIS_PER_MINUTE);
        let kills = Decimal::from(state.kills_observed);

        let accumulated_total_plat = add_plat(
            state.accumulated_raw_plat,
            state.accumulated_item_plat,
            "accumulated_total_plat",
        );

        Ok(Self {
            session_duration,
            accumulated_total_plat,
            plat_per_hour: ratio(accumulated_total_plat, total_hours),
            wasted_fine_steel_percentage: percentage(
                state.destroyed_fine_steel_plat,
                add_plat(
                    state.accumulated_item_plat,
                    state.destroyed_fine_steel_plat,
                    "fine_steel_waste_base",
                ),
            ),
            wasted_raw_percentage: percentage(
                state.destroyed_raw_plat,
                add_plat(
                    state.accumulated_item_plat,
                    state.destroyed_raw_plat,
                    "raw_waste_base",
                ),
            ),
            minutes_per_kill: ratio(total_minutes, kills),
            plat_per_kill: ratio(accumulated_total_plat, kills),
            gold_mix: percentage(state.accumulated_raw_gold, state.accumulated_raw_plat),
        })
    }

    /// Session length in fractional hours.
    pub fn total_hours(&self) -> Decimal {
        Decimal::from(self.session_duration.num_milliseconds()) / Decimal::from(MILLIS_PER_HOUR)
    }
}

/// `numerator / denominator`, or zero when the denominator is zero or the
/// quotient overflows.
fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator
        .checked_div(denominator)
        .unwrap_or(Decimal::ZERO)
}

fn percentage(part: Decimal, whole: Decimal) -> Decimal {
    ratio(part, whole).saturating_mul(Decimal::ONE_HUNDRED)
}

fn serialize_duration_secs<S: serde::Serializer>(
    duration: &TimeDelta,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(duration.num_seconds())
}
