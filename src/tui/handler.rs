//! Event handler for the dashboard
//!
//! Routes keyboard events to the active dialog first, then to the
//! tab-level keys.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveDialog, ActiveTab, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) => Ok(()),
        Event::Tick => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }
    handle_normal_key(app, key)
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::AddTransaction => {
            dialogs::transaction::handle_key(app, key);
        }
        ActiveDialog::SetBudget => {
            dialogs::budget::handle_key(app, key);
        }
        ActiveDialog::Help => {
            // Any key dismisses the help overlay
            app.close_dialog();
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // A new keypress supersedes the last status message
    app.clear_status();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),

        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Tab => app.next_tab(),
        KeyCode::Char('1') => app.switch_tab(ActiveTab::Overview),
        KeyCode::Char('2') => app.switch_tab(ActiveTab::Transactions),
        KeyCode::Char('3') => app.switch_tab(ActiveTab::Budgets),

        KeyCode::Char('a') => app.open_dialog(ActiveDialog::AddTransaction),
        KeyCode::Char('b') => app.open_dialog(ActiveDialog::SetBudget),

        KeyCode::Char('e') => {
            if app.active_tab == ActiveTab::Transactions {
                app.export_transactions();
            }
        }

        KeyCode::Char('j') | KeyCode::Down => {
            if app.active_tab == ActiveTab::Transactions {
                app.select_next_transaction();
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.active_tab == ActiveTab::Transactions {
                app.select_prev_transaction();
            }
        }

        _ => {}
    }

    Ok(())
}
