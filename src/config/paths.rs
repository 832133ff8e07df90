//! Path management for EzMoney
//!
//! ## Path Resolution Order
//!
//! 1. `EZMONEY_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/ezmoney` or `~/.config/ezmoney`
//! 3. Windows: `%APPDATA%\ezmoney`

use std::path::PathBuf;

use crate::error::EzMoneyError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "EZMONEY_DATA_DIR";

/// Manages all paths used by EzMoney
#[derive(Debug, Clone)]
pub struct EzMoneyPaths {
    base_dir: PathBuf,
}

impl EzMoneyPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, EzMoneyError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/ezmoney/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to categories.json
    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categories.json")
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), EzMoneyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| EzMoneyError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| EzMoneyError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if EzMoney has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, EzMoneyError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                EzMoneyError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("ezmoney"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, EzMoneyError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| EzMoneyError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("ezmoney"))
}
