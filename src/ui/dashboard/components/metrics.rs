//! Dashboard metric cards
//!
//! Renders the four static headline metrics

use super::super::utils::{change_arrow, change_color};
use crate::model::samples::{METRICS, MetricSummary};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Render the metric cards side by side.
pub fn render_metric_cards(f: &mut Frame, area: Rect) {
    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(METRICS.iter().map(|_| Constraint::Ratio(1, METRICS.len() as u32)))
        .split(area);

    for (metric, chunk) in METRICS.iter().zip(card_chunks.iter()) {
        render_metric_card(f, *chunk, metric);
    }
}

fn render_metric_card(f: &mut Frame, area: Rect, metric: &MetricSummary) {
    let color = change_color(metric.is_increase());
    let lines = vec![
        Line::from(Span::styled(
            metric.value,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("{} ", change_arrow(metric.is_increase())),
                Style::default().fg(color),
            ),
            Span::styled(metric.format_change(), Style::default().fg(color)),
        ]),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .title(metric.title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    f.render_widget(card, area);
}
