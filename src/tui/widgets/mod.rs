//! Reusable TUI widget state

pub mod input;

pub use input::TextInput;
