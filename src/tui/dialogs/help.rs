//! Help dialog
//!
//! Overlay listing the dashboard keybindings.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

const BINDINGS: &[(&str, &str)] = &[
    ("1 / 2 / 3", "Switch to Overview / Transactions / Budgets"),
    ("Tab", "Cycle through tabs"),
    ("a", "Add a transaction"),
    ("b", "Set a budget"),
    ("e", "Export transactions.csv (Transactions tab)"),
    ("j / k", "Move selection down / up"),
    ("?", "Toggle this help"),
    ("q", "Quit"),
];

/// Render the help overlay
pub fn render(frame: &mut Frame) {
    let height = BINDINGS.len() as u16 + 4;
    let area = centered_rect_fixed(56, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 2,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(3),
    };

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{:>10}  ", key), Style::default().fg(Color::Yellow)),
                Span::raw(*action),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
