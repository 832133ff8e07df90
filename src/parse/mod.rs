//! Free-text entry parsing
//!
//! `amount` reads numeric literals with k/m/b units, `directory` resolves
//! category tags, and `extract` ties them together into a transaction.

pub mod amount;
pub mod directory;
pub mod extract;

pub use amount::{parse_amount, unit_multiplier};
pub use directory::{CategoryDirectory, CategoryLookup};
pub use extract::{Extraction, TransactionExtractor, AMOUNT_PATTERN, CATEGORY_TAG_PATTERN};
