//! Configuration module for Cashpilot
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CashpilotPaths;
pub use settings::Settings;
