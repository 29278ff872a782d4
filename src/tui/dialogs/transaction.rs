//! Transaction entry dialog
//!
//! Modal form for recording a transaction: date, description, category
//! selector, amount, and income/expense toggle. Tab navigation, inline
//! validation, Enter to save, Esc to cancel.

use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Category, Money, Transaction, TransactionKind};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which field is currently focused in the transaction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    #[default]
    Date,
    Description,
    Category,
    Amount,
    Kind,
}

impl TransactionField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Description,
            Self::Description => Self::Category,
            Self::Category => Self::Amount,
            Self::Amount => Self::Kind,
            Self::Kind => Self::Date,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Kind,
            Self::Description => Self::Date,
            Self::Category => Self::Description,
            Self::Amount => Self::Category,
            Self::Kind => Self::Amount,
        }
    }
}

/// State for the transaction entry form
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    /// Currently focused field
    pub focused_field: TransactionField,

    /// Date input, prefilled with today
    pub date_input: TextInput,

    /// Description input
    pub description_input: TextInput,

    /// Selected category
    pub category: Category,

    /// Amount input
    pub amount_input: TextInput,

    /// Selected kind
    pub kind: TransactionKind,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for TransactionFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionFormState {
    /// Create a fresh form with the date prefilled to today
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            focused_field: TransactionField::Date,
            date_input: TextInput::new()
                .placeholder("YYYY-MM-DD")
                .content(today.format("%Y-%m-%d").to_string()),
            description_input: TextInput::new().placeholder("Optional description"),
            category: Category::Food,
            amount_input: TextInput::new().placeholder("0.00"),
            kind: TransactionKind::Expense,
            error_message: None,
        }
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// The text input behind the focused field, if it has one
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            TransactionField::Date => Some(&mut self.date_input),
            TransactionField::Description => Some(&mut self.description_input),
            TransactionField::Amount => Some(&mut self.amount_input),
            TransactionField::Category | TransactionField::Kind => None,
        }
    }

    /// Cycle the selector under focus (category or kind)
    pub fn cycle_selection(&mut self, forward: bool) {
        match self.focused_field {
            TransactionField::Category => {
                self.category = if forward {
                    self.category.next()
                } else {
                    self.category.prev()
                };
            }
            TransactionField::Kind => {
                self.kind = self.kind.toggled();
            }
            _ => {}
        }
    }

    /// Validate the form and return any error
    pub fn validate(&self) -> Result<(), String> {
        if NaiveDate::parse_from_str(self.date_input.value().trim(), "%Y-%m-%d").is_err() {
            return Err("Invalid date format. Use YYYY-MM-DD".to_string());
        }

        let amount = Money::parse(self.amount_input.value())
            .map_err(|_| "Invalid amount format".to_string())?;
        if !amount.is_positive() {
            return Err("Amount must be greater than zero".to_string());
        }

        Ok(())
    }

    /// Build a transaction from the form state
    pub fn build_transaction(&self) -> Result<Transaction, String> {
        self.validate()?;

        let date = NaiveDate::parse_from_str(self.date_input.value().trim(), "%Y-%m-%d")
            .map_err(|_| "Invalid date".to_string())?;
        let amount = Money::parse(self.amount_input.value()).map_err(|e| e.to_string())?;

        Ok(Transaction::new(
            date,
            self.description_input.value().trim(),
            self.category,
            amount,
            self.kind,
        ))
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    /// Clear any error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

/// Render the transaction dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(52, 12, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Transaction ")
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
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Date
            Constraint::Length(1), // Description
            Constraint::Length(1), // Category
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Kind
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.transaction_form;

    render_text_field(
        frame,
        chunks[0],
        "Date",
        &form.date_input,
        form.focused_field == TransactionField::Date,
    );
    render_text_field(
        frame,
        chunks[1],
        "Description",
        &form.description_input,
        form.focused_field == TransactionField::Description,
    );
    render_selector_field(
        frame,
        chunks[2],
        "Category",
        form.category.name(),
        form.focused_field == TransactionField::Category,
    );
    render_text_field(
        frame,
        chunks[3],
        "Amount",
        &form.amount_input,
        form.focused_field == TransactionField::Amount,
    );
    render_selector_field(
        frame,
        chunks[4],
        "Type",
        form.kind.name(),
        form.focused_field == TransactionField::Kind,
    );

    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[6]);
    }

    frame.render_widget(Paragraph::new(hint_line()), chunks[7]);
}

/// Key hints shown at the bottom of entry dialogs
pub(super) fn hint_line() -> Line<'static> {
    Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Choose  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ])
}

/// Render a labelled text field with a cursor when focused
pub(super) fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &TextInput,
    focused: bool,
) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let mut spans = vec![Span::styled(format!("{:>12}: ", label), label_style)];

    let value = input.value();
    if focused {
        let cursor = input.cursor.min(value.len());
        let (before, after) = value.split_at(cursor);

        spans.push(Span::styled(
            before.to_string(),
            Style::default().fg(Color::White),
        ));

        let cursor_char = after.chars().next().unwrap_or(' ');
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));

        if after.len() > 1 {
            spans.push(Span::styled(
                after[1..].to_string(),
                Style::default().fg(Color::White),
            ));
        }
    } else if value.is_empty() {
        spans.push(Span::styled(
            input.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            value.to_string(),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render a labelled enum selector ("< Food >")
pub(super) fn render_selector_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let value_style = if focused {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let arrows_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let spans = vec![
        Span::styled(format!("{:>12}: ", label), label_style),
        Span::styled("< ", arrows_style),
        Span::styled(value.to_string(), value_style),
        Span::styled(" >", arrows_style),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Handle key input for the transaction dialog
/// Returns true if the key was handled
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }

        KeyCode::Tab | KeyCode::Down => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.transaction_form.prev_field();
            } else {
                app.transaction_form.next_field();
            }
            true
        }

        KeyCode::BackTab | KeyCode::Up => {
            app.transaction_form.prev_field();
            true
        }

        KeyCode::Enter => {
            if let Err(e) = save_transaction(app) {
                app.transaction_form.set_error(e);
            }
            true
        }

        KeyCode::Left => {
            app.transaction_form.clear_error();
            match app.transaction_form.focused_field {
                TransactionField::Category | TransactionField::Kind => {
                    app.transaction_form.cycle_selection(false);
                }
                _ => {
                    if let Some(input) = app.transaction_form.focused_input() {
                        input.move_left();
                    }
                }
            }
            true
        }

        KeyCode::Right => {
            app.transaction_form.clear_error();
            match app.transaction_form.focused_field {
                TransactionField::Category | TransactionField::Kind => {
                    app.transaction_form.cycle_selection(true);
                }
                _ => {
                    if let Some(input) = app.transaction_form.focused_input() {
                        input.move_right();
                    }
                }
            }
            true
        }

        KeyCode::Backspace => {
            app.transaction_form.clear_error();
            if let Some(input) = app.transaction_form.focused_input() {
                input.backspace();
            }
            true
        }

        KeyCode::Delete => {
            app.transaction_form.clear_error();
            if let Some(input) = app.transaction_form.focused_input() {
                input.delete();
            }
            true
        }

        KeyCode::Home => {
            if let Some(input) = app.transaction_form.focused_input() {
                input.move_start();
            }
            true
        }

        KeyCode::End => {
            if let Some(input) = app.transaction_form.focused_input() {
                input.move_end();
            }
            true
        }

        KeyCode::Char(c) => {
            app.transaction_form.clear_error();
            if let Some(input) = app.transaction_form.focused_input() {
                input.insert(c);
            }
            true
        }

        _ => false,
    }
}

/// Validate, record, and close on success
fn save_transaction(app: &mut App) -> Result<(), String> {
    let txn = app.transaction_form.build_transaction()?;
    app.record_transaction(txn);
    app.close_dialog();
    app.set_status("Transaction added");
    Ok(())
}
