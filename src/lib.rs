//! Cashpilot - Terminal-based personal finance dashboard
//!
//! This library provides the core functionality for the Cashpilot dashboard.
//! It keeps a session's expenses, budget limits, and income streams in an
//! in-memory store, derives spending metrics and agent-style insight cards
//! from them, and renders everything on a single dashboard screen.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, budgets, income streams, workflows)
//! - `store`: In-memory state with change notifications
//! - `metrics`: Derived dashboard data (spend totals, utilization, insights)
//! - `tui`: The ratatui dashboard itself
//!
//! # Example
//!
//! ```rust,ignore
//! use cashpilot::config::{paths::CashpilotPaths, settings::Settings};
//! use cashpilot::store::Store;
//!
//! let paths = CashpilotPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = Store::new();
//! cashpilot::tui::run_tui(&store, &settings)?;
//! ```

pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod store;
pub mod tui;

pub use error::CashpilotError;
