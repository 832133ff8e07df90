//! Configuration module for EzMoney
//!
//! - Path resolution for settings, data files and the audit log
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::EzMoneyPaths;
pub use settings::Settings;
