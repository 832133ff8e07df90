//! Core data models for EzMoney
//!
//! Categories, transactions, their ids, and the periods used for summaries.

pub mod category;
pub mod ids;
pub mod period;
pub mod transaction;

pub use category::{seed_taxonomy, Category, SeedRoot};
pub use ids::{CategoryId, TransactionId};
pub use period::SummaryPeriod;
pub use transaction::{Transaction, TransactionType};
