//! Dashboard list panels
//!
//! Renders the top products and recent transactions tables

use super::super::utils::{change_color, format_currency, format_signed_currency};
use crate::model::samples::{RECENT_TRANSACTIONS, TOP_PRODUCTS};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Padding, Row, Table};

/// Render both list panels side by side.
pub fn render_lists_section(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let product_rows = TOP_PRODUCTS.iter().map(|product| {
        amount_row(
            product.name.to_string(),
            format_currency(u64::from(product.revenue)),
            Color::White,
        )
    });
    f.render_widget(list_table("TOP PERFORMING PRODUCTS", product_rows), chunks[0]);

    let transaction_rows = RECENT_TRANSACTIONS.iter().map(|tx| {
        amount_row(
            tx.label(),
            format_signed_currency(tx.amount),
            change_color(tx.is_credit()),
        )
    });
    f.render_widget(
        list_table("RECENT TRANSACTIONS", transaction_rows),
        chunks[1],
    );
}

fn amount_row(label: String, amount: String, amount_color: Color) -> Row<'static> {
    Row::new(vec![
        Cell::from(label),
        Cell::from(Line::from(amount).alignment(Alignment::Right)).style(
            Style::default()
                .fg(amount_color)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn list_table<'a>(title: &'a str, rows: impl IntoIterator<Item = Row<'a>>) -> Table<'a> {
    Table::new(rows, [Constraint::Fill(1), Constraint::Length(10)]).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    )
}
