//! Modal dialogs: entry forms and help

pub mod budget;
pub mod help;
pub mod transaction;
