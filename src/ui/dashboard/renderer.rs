//! Dashboard main renderer

use super::components::{drawer, footer, header, lists, metrics, revenue};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    metrics::render_metric_cards(f, main_chunks[1]);
    revenue::render_revenue_panel(f, main_chunks[2], state);
    lists::render_lists_section(f, main_chunks[3]);
    footer::render_footer(f, main_chunks[4], state);

    // Drawn last so it overlays the page.
    if state.variant.has_drawer() && state.drawer_open() {
        let below_header = main_chunks[1].union(main_chunks[4]);
        drawer::render_drawer(f, below_header);
    }
}
