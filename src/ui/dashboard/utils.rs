//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use ratatui::prelude::Color;

/// Group digits in threes: `12345` becomes `12,345`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-dollar amount, e.g. `$3,456`.
pub fn format_currency(amount: u64) -> String {
    format!("${}", format_thousands(amount))
}

/// Whole-dollar amount with an explicit sign, e.g. `+$567` or `-$123`.
pub fn format_signed_currency(amount: i64) -> String {
    let sign = if amount < 0 { '-' } else { '+' };
    format!("{}{}", sign, format_currency(amount.unsigned_abs()))
}

/// Short bar label for a revenue value, e.g. `3.5k`.
pub fn format_compact_revenue(revenue: u32) -> String {
    format!("{:.1}k", f64::from(revenue) / 1000.0)
}

/// Arrow glyph for a metric change.
pub fn change_arrow(is_increase: bool) -> &'static str {
    if is_increase { "▲" } else { "▼" }
}

/// Green for increases and credits, red otherwise.
pub fn change_color(is_increase: bool) -> Color {
    if is_increase {
        Color::LightGreen
    } else {
        Color::LightRed
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}
