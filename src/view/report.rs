//! Plain text session report.

use crate::model::SessionReport;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::Write;

const RULE_WIDTH: usize = 40;

/// Render the report as plain text sections.
///
/// Output is fully determined by the report: loot is listed in name order,
/// so unchanged inputs always produce byte-identical text.
pub fn render_text(report: &SessionReport) -> String {
    let state = &report.state;
    let metrics = &report.metrics;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Session report - Total Duration: {} hours",
        rate(metrics.total_hours())
    );

    section(&mut out, "Summary");
    let _ = writeln!(
        out,
        "Total Plat: {}pp ({}pp per hour)",
        amount(metrics.accumulated_total_plat),
        rate(metrics.plat_per_hour)
    );
    let _ = writeln!(
        out,
        "Total Raw Plat: {}pp ({}% gold)",
        amount(state.accumulated_raw_plat),
        rate(metrics.gold_mix)
    );
    let _ = writeln!(
        out,
        "Total Item Plat: {}pp ({} items looted)",
        amount(state.accumulated_item_plat),
        state.items_looted
    );

    section(&mut out, "Waste");
    let _ = writeln!(
        out,
        "Total Destroyed Raw Plat: {}pp ({}% waste)",
        amount(state.destroyed_raw_plat),
        rate(metrics.wasted_raw_percentage)
    );
    let _ = writeln!(
        out,
        "Total Destroyed Fine Steel: {}pp ({}% waste)",
        amount(state.destroyed_fine_steel_plat),
        rate(metrics.wasted_fine_steel_percentage)
    );

    section(&mut out, "Kills");
    let _ = writeln!(
        out,
        "Kills Observed: {} ({} minutes per kill)",
        state.kills_observed,
        rate(metrics.minutes_per_kill)
    );
    let _ = writeln!(out, "Average Plat Per Kill: {}pp", rate(metrics.plat_per_kill));
    let _ = writeln!(out, "Items Destroyed: {}", state.items_destroyed);
    let _ = writeln!(out, "Fine Steel Items Seen: {}", state.fine_steel_items_seen);

    section(&mut out, "Loot");
    for (name, count) in &state.kept_loot {
        let value = report
            .kept_item_values
            .get(name)
            .copied()
            .unwrap_or(Decimal::ZERO);
        let _ = writeln!(out, "{}: {} @ {}pp ea", name, count, rate(value));
    }
    for (name, count) in &state.destroyed_loot {
        let _ = writeln!(out, "{}: {} (destroyed)", name, count);
    }

    out
}

fn section(out: &mut String, title: &str) {
    let heading = format!("-- {} ", title);
    let _ = writeln!(out);
    let _ = writeln!(out, "{:-<width$}", heading, width = RULE_WIDTH);
}

/// Two decimal places, half away from zero.
fn rate(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Exact amount without trailing zeros.
fn amount(value: Decimal) -> String {
    value.normalize().to_string()
}
