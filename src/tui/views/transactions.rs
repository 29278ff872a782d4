//! Transaction history tab
//!
//! Full transaction table sorted descending by date. The sort is
//! display-only; the export action writes rows in store order.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table, TableState},
    Frame,
};

use crate::models::Transaction;
use crate::tui::app::App;

use super::render_placeholder;

/// Render the transaction history tab
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if !app.ledger.has_transactions() {
        render_placeholder(
            frame,
            area,
            "Transaction History",
            "No transactions yet. Press 'a' to add one.",
        );
        return;
    }

    // Newest first for display; ties keep insertion order
    let mut sorted: Vec<&Transaction> = app.ledger.transactions().iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let symbol = &app.settings.currency_symbol;
    let rows: Vec<Row> = sorted
        .iter()
        .map(|txn| {
            let amount_color = if txn.is_income() {
                Color::Green
            } else {
                Color::Red
            };

            Row::new(vec![
                txn.date.format(&app.settings.date_format).to_string(),
                txn.description.clone(),
                txn.category.to_string(),
                txn.amount.format_with_symbol(symbol),
                txn.kind.to_string(),
            ])
            .style(Style::default().fg(amount_color))
        })
        .collect();

    let header = Row::new(vec!["Date", "Description", "Category", "Amount", "Type"])
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let title = format!(
        " Transaction History ({}) — 'e' to export ",
        sorted.len()
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Min(20),
            Constraint::Length(14),
            Constraint::Length(12),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = TableState::default();
    state.select(Some(app.transaction_index.min(sorted.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}
