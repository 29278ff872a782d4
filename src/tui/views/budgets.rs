//! Budget analysis tab
//!
//! Budget-vs-actual table plus a grouped bar chart (budget and actual side
//! by side per category). Over-budget rows are flagged, not clamped.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Row, Table},
    Frame,
};

use crate::tui::app::App;

use super::render_placeholder;

/// Render the budget analysis tab
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if !app.ledger.has_transactions() || !app.ledger.has_budgets() {
        render_placeholder(
            frame,
            area,
            "Budget Analysis",
            "Add transactions and set budgets to see analysis.",
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),        // Table
            Constraint::Percentage(45), // Chart
        ])
        .split(area);

    render_budget_table(frame, app, chunks[0]);
    render_budget_chart(frame, app, chunks[1]);
}

fn render_budget_table(frame: &mut Frame, app: &App, area: Rect) {
    let overview = &app.snapshot.budgets;
    let symbol = &app.settings.currency_symbol;

    let rows: Vec<Row> = overview
        .rows
        .iter()
        .map(|row| {
            let status = if row.is_over_budget() { "OVER" } else { "" };
            let row_style = if row.is_over_budget() {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::White)
            };

            Row::new(vec![
                row.category.to_string(),
                row.limit.format_with_symbol(symbol),
                row.actual.format_with_symbol(symbol),
                row.remaining.format_with_symbol(symbol),
                format!("{:.1}%", row.percentage_used),
                status.to_string(),
            ])
            .style(row_style)
        })
        .collect();

    let header = Row::new(vec![
        "Category",
        "Budget",
        "Actual",
        "Remaining",
        "% Used",
        "",
    ])
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .bottom_margin(1);

    let over_count = overview.over_budget_count();
    let title = if over_count > 0 {
        format!(" Budget vs Actual — {} over budget ", over_count)
    } else {
        " Budget vs Actual ".to_string()
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(table, area);
}

fn render_budget_chart(frame: &mut Frame, app: &App, area: Rect) {
    let overview = &app.snapshot.budgets;

    let mut chart = BarChart::default()
        .block(
            Block::default()
                .title(" Budget vs Actual Spending ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .bar_width(6)
        .bar_gap(1)
        .group_gap(3);

    for row in &overview.rows {
        let actual_color = if row.is_over_budget() {
            Color::Red
        } else {
            Color::Green
        };

        let bars = [
            Bar::default()
                .label("budget".into())
                .value(row.limit.dollars().max(0) as u64)
                .style(Style::default().fg(Color::Blue)),
            Bar::default()
                .label("actual".into())
                .value(row.actual.dollars().max(0) as u64)
                .style(Style::default().fg(actual_color)),
        ];

        chart = chart.data(
            BarGroup::default()
                .label(row.category.short_name().into())
                .bars(&bars),
        );
    }

    frame.render_widget(chart, area);
}
