//! CLI command handlers
//!
//! Each handler takes the loaded storage and settings, does its work through
//! the service layer, and prints to stdout.

pub mod category;
pub mod report;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use report::{handle_audit, handle_breakdown, handle_summary};
pub use transaction::{handle_add, handle_clear, handle_delete, handle_list, handle_show};
