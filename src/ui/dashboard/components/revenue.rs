//! Revenue overview component
//!
//! Renders the timeframe selector and the monthly revenue bar chart

use super::super::state::DashboardState;
use super::super::utils::format_compact_revenue;
use crate::consts::cli_consts::{REVENUE_MAX, SERIES_LEN};
use crate::model::Timeframe;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Padding, Tabs};

/// Render the revenue panel: timeframe tabs above the bar chart.
pub fn render_revenue_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title("REVENUE OVERVIEW")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Fill(1)])
        .split(inner);

    render_timeframe_tabs(f, chunks[0], state.view_model.timeframe());
    render_revenue_chart(f, chunks[1], state);
}

/// Render the five timeframe controls, highlighting the active one.
pub fn render_timeframe_tabs(f: &mut Frame, area: Rect, selected: Timeframe) {
    let titles: Vec<Line> = Timeframe::all()
        .iter()
        .enumerate()
        .map(|(i, tf)| Line::from(format!("{} {}", i + 1, tf)))
        .collect();

    let tabs = Tabs::new(titles)
        .select(selected.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");
    f.render_widget(tabs, area);
}

fn render_revenue_chart(f: &mut Frame, area: Rect, state: &DashboardState) {
    let bars: Vec<Bar> = state
        .view_model
        .series()
        .iter()
        .map(|point| {
            Bar::default()
                .value(u64::from(point.revenue()))
                .label(Line::from(point.month().to_string()))
                .text_value(format_compact_revenue(point.revenue()))
        })
        .collect();

    // Spread the twelve bars over the available width.
    let slot = area.width / SERIES_LEN as u16;
    let bar_width = slot.saturating_sub(1).clamp(3, 9);

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(u64::from(REVENUE_MAX))
        .bar_style(Style::default().fg(Color::Rgb(136, 132, 216)))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(136, 132, 216)),
        )
        .label_style(Style::default().fg(Color::Gray));
    f.render_widget(chart, area);
}
