//! Budget entry dialog
//!
//! Modal form for setting a per-category limit. Saving for a category that
//! already has a budget replaces the old value.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Category, Money};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

use super::transaction::{hint_line, render_selector_field, render_text_field};

/// Which field is currently focused in the budget form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BudgetField {
    #[default]
    Category,
    Limit,
}

impl BudgetField {
    /// The other field (Tab toggles between the two)
    pub fn toggled(self) -> Self {
        match self {
            Self::Category => Self::Limit,
            Self::Limit => Self::Category,
        }
    }
}

/// State for the budget entry form
#[derive(Debug, Clone)]
pub struct BudgetFormState {
    /// Currently focused field
    pub focused_field: BudgetField,

    /// Selected category
    pub category: Category,

    /// Limit input
    pub limit_input: TextInput,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for BudgetFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl BudgetFormState {
    /// Create a fresh form
    pub fn new() -> Self {
        Self {
            focused_field: BudgetField::Category,
            category: Category::Food,
            limit_input: TextInput::new().placeholder("0.00"),
            error_message: None,
        }
    }

    /// Move focus to the other field
    pub fn toggle_field(&mut self) {
        self.focused_field = self.focused_field.toggled();
    }

    /// Cycle the category selector
    pub fn cycle_category(&mut self, forward: bool) {
        self.category = if forward {
            self.category.next()
        } else {
            self.category.prev()
        };
    }

    /// Validate and build the (category, limit) pair
    pub fn build_budget(&self) -> Result<(Category, Money), String> {
        let limit = Money::parse(self.limit_input.value())
            .map_err(|_| "Invalid amount format".to_string())?;
        if !limit.is_positive() {
            return Err("Budget limit must be greater than zero".to_string());
        }
        Ok((self.category, limit))
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

/// Render the budget dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(52, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Set Budget ")
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
            Constraint::Length(1), // Category
            Constraint::Length(1), // Limit
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.budget_form;

    render_selector_field(
        frame,
        chunks[0],
        "Category",
        form.category.name(),
        form.focused_field == BudgetField::Category,
    );
    render_text_field(
        frame,
        chunks[1],
        "Limit",
        &form.limit_input,
        form.focused_field == BudgetField::Limit,
    );

    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[3]);
    }

    frame.render_widget(Paragraph::new(hint_line()), chunks[4]);
}

/// Handle key input for the budget dialog
/// Returns true if the key was handled
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }

        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.budget_form.toggle_field();
            true
        }

        KeyCode::Enter => {
            if let Err(e) = save_budget(app) {
                app.budget_form.set_error(e);
            }
            true
        }

        KeyCode::Left => {
            app.budget_form.clear_error();
            if app.budget_form.focused_field == BudgetField::Category {
                app.budget_form.cycle_category(false);
            } else {
                app.budget_form.limit_input.move_left();
            }
            true
        }

        KeyCode::Right => {
            app.budget_form.clear_error();
            if app.budget_form.focused_field == BudgetField::Category {
                app.budget_form.cycle_category(true);
            } else {
                app.budget_form.limit_input.move_right();
            }
            true
        }

        KeyCode::Backspace => {
            app.budget_form.clear_error();
            if app.budget_form.focused_field == BudgetField::Limit {
                app.budget_form.limit_input.backspace();
            }
            true
        }

        KeyCode::Char(c) => {
            app.budget_form.clear_error();
            if app.budget_form.focused_field == BudgetField::Limit {
                app.budget_form.limit_input.insert(c);
            }
            true
        }

        _ => false,
    }
}

/// Validate, record, and close on success
fn save_budget(app: &mut App) -> Result<(), String> {
    let (category, limit) = app.budget_form.build_budget()?;
    app.record_budget(category, limit);
    app.close_dialog();
    app.set_status(format!("Budget set for {}", category));
    Ok(())
}
