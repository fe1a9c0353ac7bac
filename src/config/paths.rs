//! Path management for Cashpilot
//!
//! Resolves where the settings file lives.
//!
//! ## Path Resolution Order
//!
//! 1. `CASHPILOT_CONFIG_DIR` environment variable (if set)
//! 2. Platform config directory via `directories` (e.g. `~/.config/cashpilot`
//!    on Linux, `%APPDATA%\cashpilot` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::CashpilotError;

/// Manages all paths used by Cashpilot
#[derive(Debug, Clone)]
pub struct CashpilotPaths {
    /// Base directory for all Cashpilot config
    base_dir: PathBuf,
}

impl CashpilotPaths {
    /// Create a new CashpilotPaths instance
    ///
    /// Path resolution:
    /// 1. `CASHPILOT_CONFIG_DIR` env var (explicit override)
    /// 2. Platform config directory (e.g. `~/.config/cashpilot` on Linux)
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, CashpilotError> {
        let base_dir = if let Ok(custom) = std::env::var("CASHPILOT_CONFIG_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create CashpilotPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/cashpilot/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), CashpilotError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CashpilotError::Io(format!("Failed to create config directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default config directory for this platform
fn resolve_default_path() -> Result<PathBuf, CashpilotError> {
    let dirs = ProjectDirs::from("", "", "cashpilot").ok_or_else(|| {
        CashpilotError::Config("Could not determine a config directory for this platform".into())
    })?;
    Ok(dirs.config_dir().to_path_buf())
}
