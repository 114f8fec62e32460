//! Dashboard footer component
//!
//! Renders key hints and the latest activity

use super::super::state::DashboardState;
use super::super::utils::format_compact_timestamp;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer with key hints and the most recent activity.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let hints = if state.variant.has_drawer() {
        "[1-5] Timeframe | [←/→] Cycle | [M] Menu | [Q] Quit"
    } else {
        "[1-5] Timeframe | [←/→] Cycle | [Q] Quit"
    };

    let activity = match state.latest_activity() {
        Some(event) => Line::from(vec![
            Span::styled(
                format!("{} ", format_compact_timestamp(&event.timestamp)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(event.msg.clone(), Style::default().fg(Color::Gray)),
        ]),
        None => Line::from(Span::styled(
            "Showing mock data",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let footer = Paragraph::new(vec![
        Line::from(Span::styled(
            hints,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        activity,
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Thick),
    );
    f.render_widget(footer, area);
}
