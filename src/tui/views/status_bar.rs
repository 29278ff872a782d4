//! Status bar
//!
//! One line at the bottom: the latest status message when present,
//! otherwise the key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status_message {
        Some(message) => Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Green),
        )),
        None => Line::from(vec![
            key_hint("q", "quit"),
            key_hint("?", "help"),
            key_hint("a", "add txn"),
            key_hint("b", "budget"),
            key_hint("e", "export"),
            key_hint("Tab", "next tab"),
        ]),
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn key_hint(key: &'static str, action: &'static str) -> Span<'static> {
    Span::styled(
        format!(" {}:{} ", key, action),
        Style::default().fg(Color::DarkGray),
    )
}
