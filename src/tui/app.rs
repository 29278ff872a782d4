//! Application state for the dashboard
//!
//! The App struct borrows the ledger from the hosting process and holds
//! everything else needed for rendering and event handling. Every mutation
//! goes through `record_transaction`/`record_budget`, which recompute the
//! dashboard snapshot before the next render.

use std::path::Path;

use crate::config::Settings;
use crate::export::write_transactions_file;
use crate::ledger::Ledger;
use crate::models::{Category, Money, Transaction};
use crate::reports::DashboardSnapshot;

use super::dialogs::budget::BudgetFormState;
use super::dialogs::transaction::TransactionFormState;

/// Which dashboard tab is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Overview,
    Transactions,
    Budgets,
}

impl ActiveTab {
    /// Tab titles in display order
    pub const TITLES: [&'static str; 3] = ["Overview", "Transactions", "Budgets"];

    /// Index into `TITLES`
    pub fn index(self) -> usize {
        match self {
            Self::Overview => 0,
            Self::Transactions => 1,
            Self::Budgets => 2,
        }
    }

    /// The tab after this one, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::Overview => Self::Transactions,
            Self::Transactions => Self::Budgets,
            Self::Budgets => Self::Overview,
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddTransaction,
    SetBudget,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// The session ledger, owned by the hosting process
    pub ledger: &'a mut Ledger,

    /// Display settings
    pub settings: &'a Settings,

    /// Precomputed aggregates; refreshed after every mutation
    pub snapshot: DashboardSnapshot,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently visible tab
    pub active_tab: ActiveTab,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the transaction table
    pub transaction_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Transaction entry form state
    pub transaction_form: TransactionFormState,

    /// Budget entry form state
    pub budget_form: BudgetFormState,
}

impl<'a> App<'a> {
    /// Create a new App instance over an existing ledger
    pub fn new(ledger: &'a mut Ledger, settings: &'a Settings) -> Self {
        let snapshot = DashboardSnapshot::compute(ledger);
        Self {
            ledger,
            settings,
            snapshot,
            should_quit: false,
            active_tab: ActiveTab::default(),
            active_dialog: ActiveDialog::default(),
            transaction_index: 0,
            status_message: None,
            transaction_form: TransactionFormState::new(),
            budget_form: BudgetFormState::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a specific tab
    pub fn switch_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
        self.transaction_index = 0;
    }

    /// Cycle to the next tab
    pub fn next_tab(&mut self) {
        self.switch_tab(self.active_tab.next());
    }

    /// Open a dialog, resetting its form state
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match dialog {
            ActiveDialog::AddTransaction => {
                self.transaction_form = TransactionFormState::new();
            }
            ActiveDialog::SetBudget => {
                self.budget_form = BudgetFormState::new();
            }
            ActiveDialog::Help | ActiveDialog::None => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Recompute the dashboard snapshot from the ledger
    pub fn refresh(&mut self) {
        self.snapshot = DashboardSnapshot::compute(self.ledger);
    }

    /// Append a transaction and refresh the snapshot
    pub fn record_transaction(&mut self, txn: Transaction) {
        self.ledger.add_transaction(txn);
        self.refresh();
    }

    /// Upsert a budget and refresh the snapshot
    pub fn record_budget(&mut self, category: Category, limit: Money) {
        self.ledger.upsert_budget(category, limit);
        self.refresh();
    }

    /// Move the transaction selection up
    pub fn select_prev_transaction(&mut self) {
        self.transaction_index = self.transaction_index.saturating_sub(1);
    }

    /// Move the transaction selection down
    pub fn select_next_transaction(&mut self) {
        let max = self.ledger.transactions().len();
        if self.transaction_index + 1 < max {
            self.transaction_index += 1;
        }
    }

    /// Export transactions.csv into the current directory
    pub fn export_transactions(&mut self) {
        if !self.ledger.has_transactions() {
            self.set_status("Nothing to export yet");
            return;
        }

        match write_transactions_file(self.ledger, Path::new(".")) {
            Ok(path) => self.set_status(format!("Exported to {}", path.display())),
            Err(e) => self.set_status(format!("Export failed: {}", e)),
        }
    }
}
