//! Final session report data.

use super::error::MetricsError;
use super::metrics::SessionMetrics;
use super::session::SessionState;
use super::values::ValueTable;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything a report formatter needs: terminal state, derived metrics and
/// the unit value of each kept item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    /// Terminal session state.
    pub state: SessionState,
    /// Metrics derived from `state`.
    pub metrics: SessionMetrics,
    /// Table value of every item in `state.kept_loot`.
    pub kept_item_values: BTreeMap<String, Decimal>,
}

impl SessionReport {
    /// Derive metrics and resolve kept item values.
    ///
    /// # Errors
    ///
    /// Returns `MetricsError::NoSessionObserved` if the session never started.
    pub fn new(state: SessionState, values: &ValueTable) -> Result<Self, MetricsError> {
        let metrics = SessionMetrics::derive(&state)?;
        let kept_item_values = state
            .kept_loot
            .keys()
            .filter_map(|name| values.get(name).map(|value| (name.clone(), value)))
            .collect();

        Ok(Self {
            state,
            metrics,
            kept_item_values,
        })
    }
}
