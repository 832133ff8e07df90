//! User settings for EzMoney
//!
//! Holds the default category name used when an entry has no resolvable tag,
//! the currency stamped onto new transactions, and display preferences.

use serde::{Deserialize, Serialize};

use super::paths::EzMoneyPaths;
use crate::error::EzMoneyError;

/// Name of the seeded category used as the fallback for untagged entries
pub const DEFAULT_CATEGORY_NAME: &str = "To Live";

/// User settings for EzMoney
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Category assigned when an entry's tag is missing or unknown
    #[serde(default = "default_category_name")]
    pub default_category_name: String,

    /// Currency code recorded on every new transaction
    #[serde(default = "default_currency_code")]
    pub currency_code: String,

    /// Timestamp format for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_category_name() -> String {
    DEFAULT_CATEGORY_NAME.to_string()
}

fn default_currency_code() -> String {
    "USD".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_category_name: default_category_name(),
            currency_code: default_currency_code(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &EzMoneyPaths) -> Result<Self, EzMoneyError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| EzMoneyError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| EzMoneyError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &EzMoneyPaths) -> Result<(), EzMoneyError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| EzMoneyError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| EzMoneyError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_category_name, "To Live");
        assert_eq!(settings.currency_code, "USD");
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EzMoneyPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_category_name = "Have Fun".to_string();
        settings.currency_code = "VND".to_string();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_category_name, "Have Fun");
        assert_eq!(loaded.currency_code, "VND");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_code": "EUR"}"#).unwrap();
        assert_eq!(settings.currency_code, "EUR");
        assert_eq!(settings.default_category_name, DEFAULT_CATEGORY_NAME);
        assert_eq!(settings.date_format, "%Y-%m-%d %H:%M");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EzMoneyPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, EzMoneyError::Config(_)));
    }
}
