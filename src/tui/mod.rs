//! Terminal dashboard
//!
//! The interactive presentation layer, built on ratatui. Three tabs
//! (overview, transaction history, budget analysis), modal entry forms,
//! and an explicit mutate-then-recompute-then-render cycle.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

pub use app::App;
pub use terminal::run_dashboard;
