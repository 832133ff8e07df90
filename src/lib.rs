//! EzMoney - free-text expense tracking
//!
//! Transactions are entered as one line of text. The last amount-like token
//! (`12.5k`, `300`, `2M`) becomes the amount, the last `/Name|` tag selects
//! the category, and the rest of the line is kept as the memo.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Categories, transactions, ids and summary periods
//! - `parse`: Amount parsing and transaction extraction
//! - `storage`: JSON file storage layer
//! - `services`: Category seeding and lookup, recording and deleting entries
//! - `reports`: Period totals and per-category breakdowns
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `ezmoney` binary
//!
//! # Example
//!
//! ```rust
//! use ezmoney::models::seed_taxonomy;
//! use ezmoney::parse::{CategoryDirectory, TransactionExtractor};
//!
//! let directory = CategoryDirectory::new(seed_taxonomy(), "To Live");
//! let extraction = TransactionExtractor::new("USD").extract(
//!     "lunch 12.5k /Have Fun|",
//!     chrono::Utc::now(),
//!     &directory,
//! );
//!
//! assert_eq!(extraction.transaction.amount, 12_500.0);
//! assert_eq!(extraction.transaction.memo, "lunch  ");
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod parse;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{EzMoneyError, EzResult};
