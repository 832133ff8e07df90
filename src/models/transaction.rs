//! Transaction model
//!
//! A transaction is produced whole from one line of user input and is not
//! edited afterwards; it is only ever stored or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, TransactionId};

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A recorded transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// When the transaction happened
    pub timestamp: DateTime<Utc>,

    /// Unit-less magnitude, never negative when produced by the extractor
    pub amount: f64,

    /// Free text left over after the amount and tag are removed
    #[serde(default)]
    pub memo: String,

    /// Referenced category, if any
    pub category_id: Option<CategoryId>,

    #[serde(default, rename = "type")]
    pub kind: TransactionType,

    /// Currency code, fixed per deployment
    pub currency: String,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new expense with an empty memo and no category
    pub fn new(timestamp: DateTime<Utc>, amount: f64, currency: impl Into<String>) -> Self {
        Self {
            id: TransactionId::new(),
            timestamp,
            amount,
            memo: String::new(),
            category_id: None,
            kind: TransactionType::Expense,
            currency: currency.into(),
            created_at: Utc::now(),
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.timestamp.format("%Y-%m-%d"),
            self.memo.trim(),
            self.amount,
            self.currency
        )
    }
}
