//! Snapshot mode execution
//!
//! Renders the dashboard once as plain text, for terminals without TUI support
//! and for scripting.

use crate::consts::cli_consts::REVENUE_MAX;
use crate::model::Timeframe;
use crate::model::samples::{METRICS, NAV_ENTRIES, RECENT_TRANSACTIONS, TOP_PRODUCTS};
use crate::ui::UIConfig;
use crate::ui::dashboard::DashboardState;
use crate::ui::dashboard::components::header::TITLE;
use crate::ui::dashboard::utils::{
    change_arrow, format_currency, format_signed_currency, format_thousands,
};
use std::fmt::Write;

/// Widest text bar, reached at the top of the revenue range.
const BAR_WIDTH: u32 = 40;

/// Runs the application in snapshot mode
///
/// # Arguments
/// * `ui_config` - Presentation settings resolved from config and flags
/// * `timeframe` - Timeframe to select before printing, if any
pub fn run_snapshot_mode(ui_config: UIConfig, timeframe: Option<Timeframe>) {
    let mut state = DashboardState::new(&ui_config);
    if let Some(timeframe) = timeframe {
        state.select_timeframe(timeframe);
    }
    print!("{}", format_snapshot(&state));
}

/// Plain-text rendering of the whole dashboard.
pub fn format_snapshot(state: &DashboardState) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_snapshot(&mut out, state);
    out
}

fn write_snapshot(out: &mut String, state: &DashboardState) -> std::fmt::Result {
    writeln!(out, "{}", TITLE)?;
    writeln!(out)?;

    for metric in METRICS.iter() {
        writeln!(
            out,
            "{:<16}{:>10}  {} {}",
            metric.title,
            metric.value,
            change_arrow(metric.is_increase()),
            metric.format_change()
        )?;
    }
    writeln!(out)?;

    let selected = state.view_model.timeframe();
    let controls: Vec<String> = Timeframe::all()
        .into_iter()
        .map(|tf| {
            if tf == selected {
                format!("[{}]", tf)
            } else {
                tf.to_string()
            }
        })
        .collect();
    writeln!(out, "Revenue Overview  {}", controls.join(" "))?;
    for point in state.view_model.series().iter() {
        let bar_len = point.revenue() * BAR_WIDTH / REVENUE_MAX;
        writeln!(
            out,
            "  {}  {:<width$} {:>5}",
            point.month(),
            "#".repeat(bar_len as usize),
            format_thousands(u64::from(point.revenue())),
            width = BAR_WIDTH as usize
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Top Performing Products")?;
    for product in TOP_PRODUCTS.iter() {
        writeln!(
            out,
            "  {:<20}{:>8}",
            product.name,
            format_currency(u64::from(product.revenue))
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Recent Transactions")?;
    for tx in RECENT_TRANSACTIONS.iter() {
        writeln!(
            out,
            "  {:<20}{:>8}",
            tx.label(),
            format_signed_currency(tx.amount)
        )?;
    }

    if state.variant.has_drawer() {
        writeln!(out)?;
        writeln!(out, "Menu: {}", NAV_ENTRIES.join(" | "))?;
    }

    let activity: Vec<_> = state
        .activity_logs
        .iter()
        .filter(|event| event.should_display(state.log_threshold))
        .collect();
    if !activity.is_empty() {
        writeln!(out)?;
        writeln!(out, "Activity")?;
        for event in activity {
            writeln!(out, "  {}", event)?;
        }
    }
    Ok(())
}
