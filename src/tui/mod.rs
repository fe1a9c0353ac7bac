//! Terminal User Interface module
//!
//! This module provides the single-page dashboard TUI for Cashpilot using
//! ratatui. The dashboard includes views for expenses, budgets, income,
//! and agent insights, plus dialogs for data entry.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Command palette
pub mod commands;

pub use app::App;
pub use terminal::run_tui;
