//! Session accumulation.
//!
//! [`SessionAccumulator`] is the only writer of [`SessionState`]. It consumes
//! classified events in log order and keeps running totals. Derived rates
//! live in [`crate::model::metrics`] and are computed once the log is
//! exhausted.

use super::currency::{add_plat, CoinDrop, Denomination};
use super::event::LogEvent;
use super::values::ValueTable;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Item name prefix for the Fine Steel weapon category.
pub const FINE_STEEL_PREFIX: &str = "Fine Steel";

/// Assumed resale value of a destroyed Fine Steel item, in platinum.
pub const FINE_STEEL_AVERAGE_VALUE: Decimal = Decimal::from_parts(40, 0, 0, false, 1);

/// Which loot categories the player destroys instead of keeping.
///
/// Fixed for the duration of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DestroyPolicy {
    /// Silver coins are discarded and counted as waste.
    pub destroy_silver: bool,
    /// Copper coins are discarded and counted as waste.
    pub destroy_copper: bool,
    /// Fine Steel items are discarded and counted as waste at the assumed value.
    pub destroy_fine_steel: bool,
}

impl Default for DestroyPolicy {
    fn default() -> Self {
        Self {
            destroy_silver: true,
            destroy_copper: true,
            destroy_fine_steel: true,
        }
    }
}

impl DestroyPolicy {
    /// Whether coins of this denomination are destroyed under this policy.
    pub fn destroys(&self, denomination: Denomination) -> bool {
        match denomination {
            Denomination::Silver => self.destroy_silver,
            Denomination::Copper => self.destroy_copper,
            Denomination::Platinum | Denomination::Gold => false,
        }
    }
}

/// Running totals for one tracked session.
///
/// # Invariants
///
/// - All amounts are in platinum
/// - `items_looted` equals the sum of `kept_loot` counts
/// - `items_destroyed` equals the sum of `destroyed_loot` counts
/// - `session_start` is `None` until the first kill or session start marker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    /// Coin value kept, in platinum (all denominations not destroyed).
    pub accumulated_raw_plat: Decimal,
    /// Portion of `accumulated_raw_plat` that dropped as gold.
    pub accumulated_raw_gold: Decimal,
    /// Table value of all kept items.
    pub accumulated_item_plat: Decimal,
    /// Coin value destroyed under the policy.
    pub destroyed_raw_plat: Decimal,
    /// Assumed value of destroyed Fine Steel items.
    pub destroyed_fine_steel_plat: Decimal,
    /// Kill markers seen since the session started.
    pub kills_observed: u32,
    /// Items with a known value.
    pub items_looted: u32,
    /// Items without a known value.
    pub items_destroyed: u32,
    /// Fine Steel items seen, kept or not.
    pub fine_steel_items_seen: u32,
    /// Per-item count of kept loot.
    pub kept_loot: BTreeMap<String, u32>,
    /// Per-item count of destroyed loot.
    pub destroyed_loot: BTreeMap<String, u32>,
    /// When tracking started.
    pub session_start: Option<NaiveDateTime>,
    /// Timestamp of the most recent kill.
    pub session_end: Option<NaiveDateTime>,
    /// Destroy policy in effect for this run.
    pub policy: DestroyPolicy,
}

impl SessionState {
    /// Create an empty state with the given policy.
    pub fn new(policy: DestroyPolicy) -> Self {
        Self {
            accumulated_raw_plat: Decimal::ZERO,
            accumulated_raw_gold: Decimal::ZERO,
            accumulated_item_plat: Decimal::ZERO,
            destroyed_raw_plat: Decimal::ZERO,
            destroyed_fine_steel_plat: Decimal::ZERO,
            kills_observed: 0,
            items_looted: 0,
            items_destroyed: 0,
            fine_steel_items_seen: 0,
            kept_loot: BTreeMap::new(),
            destroyed_loot: BTreeMap::new(),
            session_start: None,
            session_end: None,
            policy,
        }
    }

    /// Total item loot events processed (kept plus destroyed).
    pub fn item_events(&self) -> u32 {
        self.items_looted + self.items_destroyed
    }

    fn reset(&mut self, start: NaiveDateTime) {
        let policy = self.policy;
        let session_end = self.session_end;
        *self = Self::new(policy);
        self.session_end = session_end;
        self.session_start = Some(start);
    }
}

/// State machine folding classified events into a [`SessionState`].
#[derive(Debug)]
pub struct SessionAccumulator<'a> {
    state: SessionState,
    values: &'a ValueTable,
}

impl<'a> SessionAccumulator<'a> {
    /// Create an accumulator that resolves item values against `values`.
    pub fn new(values: &'a ValueTable, policy: DestroyPolicy) -> Self {
        Self {
            state: SessionState::new(policy),
            values,
        }
    }

    /// Apply one event. Events must be applied in log order.
    pub fn apply(&mut self, event: &LogEvent, timestamp: NaiveDateTime) {
        match event {
            LogEvent::SessionStart => {
                tracing::debug!(%timestamp, "Session start marker, resetting totals");
                self.state.reset(timestamp);
            }
            LogEvent::Kill => self.record_kill(timestamp),
            LogEvent::RawCurrencyDrop { entries } => {
                for drop in entries {
                    self.record_coins(drop);
                }
            }
            LogEvent::ItemLoot { item_name } => self.record_item(item_name),
            LogEvent::Unrecognized => {}
        }
    }

    /// Current state, for inspection mid-stream.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Finish accumulation and return the terminal state.
    pub fn finish(self) -> SessionState {
        self.state
    }

    fn record_kill(&mut self, timestamp: NaiveDateTime) {
        if self.state.session_start.is_none() {
            self.state.session_start = Some(timestamp);
        }
        self.state.session_end = Some(timestamp);
        self.state.kills_observed += 1;
    }

    fn record_coins(&mut self, drop: &CoinDrop) {
        let plat = drop.platinum();

        if self.state.policy.destroys(drop.denomination) {
            self.state.destroyed_raw_plat =
                add_plat(self.state.destroyed_raw_plat, plat, "destroyed_raw_plat");
            return;
        }

        if drop.denomination == Denomination::Gold {
            self.state.accumulated_raw_gold =
                add_plat(self.state.accumulated_raw_gold, plat, "accumulated_raw_gold");
        }
        self.state.accumulated_raw_plat =
            add_plat(self.state.accumulated_raw_plat, plat, "accumulated_raw_plat");
    }

    fn record_item(&mut self, item_name: &str) {
        match self.values.get(item_name) {
            Some(value) => {
                self.state.accumulated_item_plat = add_plat(
                    self.state.accumulated_item_plat,
                    value,
                    "accumulated_item_plat",
                );
                self.state.items_looted += 1;
                *self
                    .state
                    .kept_loot
                    .entry(item_name.to_string())
                    .or_default() += 1;
            }
            None => {
                self.state.items_destroyed += 1;
                *self
                    .state
                    .destroyed_loot
                    .entry(item_name.to_string())
                    .or_default() += 1;
            }
        }

        if item_name.starts_with(FINE_STEEL_PREFIX) {
            self.state.fine_steel_items_seen += 1;
            if self.state.policy.destroy_fine_steel {
                self.state.destroyed_fine_steel_plat = add_plat(
                    self.state.destroyed_fine_steel_plat,
                    FINE_STEEL_AVERAGE_VALUE,
                    "destroyed_fine_steel_plat",
                );
            }
        }
    }
}
