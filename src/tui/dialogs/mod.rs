//! Dialog modules for the TUI
//!
//! Contains modal dialogs for various operations

pub mod budget;
pub mod command_palette;
pub mod confirm;
pub mod expense;
pub mod help;
pub mod income;
