//! Navigation drawer component
//!
//! Overlays the inert navigation entries on the left edge of the screen

use crate::consts::cli_consts::DRAWER_WIDTH;
use crate::model::samples::NAV_ENTRIES;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Clear, List, ListItem, Padding};

/// Render the open drawer over the left part of `area`.
pub fn render_drawer(f: &mut Frame, area: Rect) {
    let drawer_area = Rect {
        width: DRAWER_WIDTH.min(area.width),
        ..area
    };

    let items: Vec<ListItem> = NAV_ENTRIES
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            // The dashboard is the only page, so it is always the current entry.
            let style = if i == 0 {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(*entry).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title("MENU")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Rgb(16, 20, 24)))
            .padding(Padding::uniform(1)),
    );

    f.render_widget(Clear, drawer_area);
    f.render_widget(list, drawer_area);
}
