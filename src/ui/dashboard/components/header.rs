//! Dashboard header component
//!
//! Renders the page title and, on the drawer variant, the menu hint

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub const TITLE: &str = "FINANCIAL DASHBOARD";

/// Render header with title.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_type(BorderType::Thick);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let title = Paragraph::new(TITLE).alignment(Alignment::Center).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    if !state.variant.has_drawer() {
        f.render_widget(title, inner);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Fill(1),
            Constraint::Length(12),
        ])
        .split(inner);

    let menu_style = if state.drawer_open() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    f.render_widget(Paragraph::new("☰ Menu [M]").style(menu_style), chunks[0]);
    f.render_widget(title, chunks[1]);
}
