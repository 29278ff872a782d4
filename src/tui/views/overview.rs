//! Overview tab
//!
//! Metric tiles for the financial summary, a monthly income/expense line
//! chart, and an expense-by-category bar chart. All values come from the
//! precomputed dashboard snapshot.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::models::{Money, TransactionKind};
use crate::tui::app::App;

use super::render_placeholder;

/// Render the overview tab
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if !app.ledger.has_transactions() {
        render_placeholder(
            frame,
            area,
            "Overview",
            "No transactions yet. Press 'a' to add one.",
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Metric tiles
            Constraint::Min(8),    // Charts
        ])
        .split(area);

    render_metrics(frame, app, chunks[0]);

    let chart_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_trend_chart(frame, app, chart_chunks[0]);
    render_spending_chart(frame, app, chart_chunks[1]);
}

/// Three metric tiles: income, expenses, net balance
fn render_metrics(frame: &mut Frame, app: &App, area: Rect) {
    let summary = &app.snapshot.summary;
    let symbol = &app.settings.currency_symbol;

    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    render_metric_tile(
        frame,
        tiles[0],
        "Total Income",
        summary.total_income.format_with_symbol(symbol),
        Color::Green,
    );
    render_metric_tile(
        frame,
        tiles[1],
        "Total Expenses",
        summary.total_expenses.format_with_symbol(symbol),
        Color::Red,
    );

    let balance_color = if summary.is_in_deficit() {
        Color::Red
    } else {
        Color::Green
    };
    render_metric_tile(
        frame,
        tiles[2],
        "Net Balance",
        summary.net_balance.format_with_symbol(symbol),
        balance_color,
    );
}

fn render_metric_tile(frame: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = Paragraph::new(Line::from(Span::styled(
        value,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .block(block)
    .alignment(Alignment::Center);

    frame.render_widget(text, area);
}

/// Dollars as a chart coordinate
fn chart_value(amount: Money) -> f64 {
    amount.cents() as f64 / 100.0
}

/// Income vs expenses over time as a two-line chart
fn render_trend_chart(frame: &mut Frame, app: &App, area: Rect) {
    let trend = &app.snapshot.monthly;
    let months = trend.months();

    let income_points: Vec<(f64, f64)> = trend
        .series_for(TransactionKind::Income)
        .into_iter()
        .enumerate()
        .map(|(i, (_, total))| (i as f64, chart_value(total)))
        .collect();
    let expense_points: Vec<(f64, f64)> = trend
        .series_for(TransactionKind::Expense)
        .into_iter()
        .enumerate()
        .map(|(i, (_, total))| (i as f64, chart_value(total)))
        .collect();

    let max_y = income_points
        .iter()
        .chain(expense_points.iter())
        .map(|(_, y)| *y)
        .fold(0.0_f64, f64::max)
        .max(1.0);

    let datasets = vec![
        Dataset::default()
            .name("Income")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&income_points),
        Dataset::default()
            .name("Expense")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&expense_points),
    ];

    let max_x = (months.len().saturating_sub(1)).max(1) as f64;

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Monthly Trend ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, max_x])
                .labels(month_labels(&months)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, max_y * 1.1])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{:.0}", max_y * 1.1)),
                ]),
        );

    frame.render_widget(chart, area);
}

/// First / middle / last month keys as evenly spaced axis labels
fn month_labels(months: &[String]) -> Vec<Span<'static>> {
    match months.len() {
        0 => Vec::new(),
        1 => vec![Span::raw(months[0].clone())],
        2 => vec![Span::raw(months[0].clone()), Span::raw(months[1].clone())],
        n => vec![
            Span::raw(months[0].clone()),
            Span::raw(months[n / 2].clone()),
            Span::raw(months[n - 1].clone()),
        ],
    }
}

/// Expense breakdown by category as a bar chart
fn render_spending_chart(frame: &mut Frame, app: &App, area: Rect) {
    let breakdown = &app.snapshot.spending;

    if breakdown.is_empty() {
        render_placeholder(frame, area, "Expense Breakdown", "No expenses recorded yet.");
        return;
    }

    let bars: Vec<Bar> = breakdown
        .rows
        .iter()
        .map(|row| {
            Bar::default()
                .label(row.category.short_name().into())
                .value(row.total.dollars().max(0) as u64)
                .text_value(format!("{:.0}%", row.percentage))
                .style(Style::default().fg(Color::Magenta))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Expense Breakdown ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .bar_width(7)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
