//! Service layer for EzMoney
//!
//! Services sit between the CLI and storage: categories are seeded and
//! resolved here, and free-text entries are extracted and persisted.

pub mod category;
pub mod transaction;

pub use category::{CategoryService, CategoryTreeEntry};
pub use transaction::TransactionService;
