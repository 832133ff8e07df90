//! Storage layer for EzMoney
//!
//! JSON file repositories for categories and transactions, coordinated by
//! `Storage`. Transactions point at categories by id; removing a category
//! goes through `Storage::delete_category`, which removes the subtree and its
//! transactions explicitly.

pub mod categories;
pub mod file_io;
pub mod transactions;

pub use categories::CategoryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use transactions::TransactionRepository;

use tracing::{debug, info};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::EzMoneyPaths;
use crate::error::{EzMoneyError, EzResult};
use crate::models::{Category, CategoryId, Transaction, TransactionId};

pub(crate) fn lock_poisoned<E: std::fmt::Display>(e: E) -> EzMoneyError {
    EzMoneyError::Storage(format!("Failed to acquire lock: {}", e))
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: EzMoneyPaths,
    audit: AuditLogger,
    pub categories: CategoryRepository,
    pub transactions: TransactionRepository,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: EzMoneyPaths) -> EzResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            categories: CategoryRepository::new(paths.categories_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &EzMoneyPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> EzResult<()> {
        self.categories.load()?;
        self.transactions.load()?;
        debug!(
            categories = self.categories.count()?,
            transactions = self.transactions.count()?,
            "storage loaded"
        );
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> EzResult<()> {
        self.categories.save()?;
        self.transactions.save()?;
        Ok(())
    }

    pub fn insert_category(&self, category: Category) -> EzResult<()> {
        let entry = AuditEntry::create(
            EntityType::Category,
            category.id.to_string(),
            Some(category.name.clone()),
            &category,
        );
        self.categories.insert(category)?;
        self.categories.save()?;
        self.audit.log(&entry)
    }

    pub fn insert_transaction(&self, txn: Transaction) -> EzResult<()> {
        let entry = AuditEntry::create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.memo.trim().to_string()),
            &txn,
        );
        self.transactions.insert(txn)?;
        self.transactions.save()?;
        self.audit.log(&entry)
    }

    /// Delete one transaction; unknown ids are a `NotFound` error
    pub fn delete_transaction(&self, id: TransactionId) -> EzResult<Transaction> {
        let txn = self
            .transactions
            .delete(id)?
            .ok_or_else(|| EzMoneyError::transaction_not_found(id.to_string()))?;
        self.transactions.save()?;
        self.log_deleted_transactions(std::slice::from_ref(&txn))?;
        Ok(txn)
    }

    /// Delete every transaction, returning how many were removed
    pub fn delete_all_transactions(&self) -> EzResult<usize> {
        let removed = self.transactions.delete_all()?;
        self.transactions.save()?;
        self.log_deleted_transactions(&removed)?;
        info!(count = removed.len(), "cleared all transactions");
        Ok(removed.len())
    }

    /// Delete a category, its descendants, and every transaction referencing
    /// any of them. Returns `(categories_removed, transactions_removed)`.
    pub fn delete_category(&self, id: CategoryId) -> EzResult<(usize, usize)> {
        if self.categories.get(id)?.is_none() {
            return Err(EzMoneyError::category_not_found(id.to_string()));
        }

        let subtree = self.categories.get_subtree(id)?;

        let removed_txns = self.transactions.delete_by_categories(&subtree)?;
        self.transactions.save()?;
        self.log_deleted_transactions(&removed_txns)?;

        let removed_cats = self.categories.remove_many(&subtree)?;
        self.categories.save()?;
        let entries: Vec<_> = removed_cats
            .iter()
            .map(|c| AuditEntry::delete(EntityType::Category, c.id.to_string(), Some(c.name.clone()), c))
            .collect();
        self.audit.log_batch(&entries)?;

        info!(
            categories = removed_cats.len(),
            transactions = removed_txns.len(),
            "deleted category subtree"
        );
        Ok((removed_cats.len(), removed_txns.len()))
    }

    pub fn query_all_categories(&self) -> EzResult<Vec<Category>> {
        self.categories.get_all()
    }

    pub fn query_all_transactions(&self) -> EzResult<Vec<Transaction>> {
        self.transactions.get_all()
    }

    fn log_deleted_transactions(&self, removed: &[Transaction]) -> EzResult<()> {
        let entries: Vec<_> = removed
            .iter()
            .map(|t| {
                AuditEntry::delete(
                    EntityType::Transaction,
                    t.id.to_string(),
                    Some(t.memo.trim().to_string()),
                    t,
                )
            })
            .collect();
        self.audit.log_batch(&entries)
    }
}
