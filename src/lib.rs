//! findash - Terminal-based personal finance dashboard
//!
//! This library provides the core functionality for findash: an in-memory
//! ledger of transactions and budgets, pure aggregation reports over it,
//! CSV export, and a ratatui dashboard for interactive use.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, transactions, budgets)
//! - `ledger`: In-memory session store
//! - `reports`: Aggregation over the ledger (pure functions)
//! - `export`: CSV export and read-back
//! - `tui`: The interactive dashboard
//!
//! # Example
//!
//! ```rust
//! use findash::ledger::Ledger;
//! use findash::models::{Category, Money, Transaction, TransactionKind};
//! use findash::reports::DashboardSnapshot;
//!
//! let mut ledger = Ledger::new();
//! ledger.add_transaction(Transaction::new(
//!     chrono::NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
//!     "groceries",
//!     Category::Food,
//!     Money::from_cents(5000),
//!     TransactionKind::Expense,
//! ));
//! ledger.upsert_budget(Category::Food, Money::from_cents(10000));
//!
//! let snapshot = DashboardSnapshot::compute(&ledger);
//! assert_eq!(snapshot.budgets.rows[0].remaining, Money::from_cents(5000));
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod tui;

pub use error::FindashError;
