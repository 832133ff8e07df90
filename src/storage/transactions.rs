//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json, with an
//! index from category to the transactions that reference it.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::EzMoneyError;
use crate::models::{CategoryId, Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};
use super::lock_poisoned;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence with a category index
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
    /// Index: category_id -> transaction_ids
    by_category: RwLock<HashMap<CategoryId, Vec<TransactionId>>>,
}

/// Newest first, ties broken by creation time
fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then(b.created_at.cmp(&a.created_at))
    });
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_category: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk and rebuild the index
    pub fn load(&self) -> Result<(), EzMoneyError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(lock_poisoned)?;
        let mut by_category = self.by_category.write().map_err(lock_poisoned)?;

        data.clear();
        by_category.clear();

        for txn in file_data.transactions {
            if let Some(cat_id) = txn.category_id {
                by_category.entry(cat_id).or_default().push(txn.id);
            }
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Save transactions to disk, newest first
    pub fn save(&self) -> Result<(), EzMoneyError> {
        let data = self.data.read().map_err(lock_poisoned)?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        sort_newest_first(&mut transactions);

        write_json_atomic(&self.path, &TransactionData { transactions })
    }

    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, EzMoneyError> {
        let data = self.data.read().map_err(lock_poisoned)?;
        Ok(data.get(&id).cloned())
    }

    /// Find a transaction by full UUID or short display id (`txn-1a2b3c4d`)
    pub fn find(&self, identifier: &str) -> Result<Option<Transaction>, EzMoneyError> {
        if let Ok(id) = TransactionId::parse(identifier) {
            return self.get(id);
        }

        let data = self.data.read().map_err(lock_poisoned)?;
        Ok(data.values().find(|t| t.id.matches(identifier)).cloned())
    }

    /// All transactions, newest first
    pub fn get_all(&self) -> Result<Vec<Transaction>, EzMoneyError> {
        let data = self.data.read().map_err(lock_poisoned)?;
        let mut transactions: Vec<_> = data.values().cloned().collect();
        sort_newest_first(&mut transactions);
        Ok(transactions)
    }

    /// Transactions referencing `category_id`, newest first
    pub fn get_by_category(&self, category_id: CategoryId) -> Result<Vec<Transaction>, EzMoneyError> {
        let data = self.data.read().map_err(lock_poisoned)?;
        let by_category = self.by_category.read().map_err(lock_poisoned)?;

        let ids = by_category.get(&category_id).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut transactions: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        sort_newest_first(&mut transactions);
        Ok(transactions)
    }

    /// Insert a transaction, replacing any existing one with the same id
    pub fn insert(&self, txn: Transaction) -> Result<(), EzMoneyError> {
        let mut data = self.data.write().map_err(lock_poisoned)?;
        let mut by_category = self.by_category.write().map_err(lock_poisoned)?;

        if let Some(old_cat) = data.get(&txn.id).and_then(|old| old.category_id) {
            if let Some(ids) = by_category.get_mut(&old_cat) {
                ids.retain(|&id| id != txn.id);
            }
        }

        if let Some(cat_id) = txn.category_id {
            by_category.entry(cat_id).or_default().push(txn.id);
        }
        data.insert(txn.id, txn);
        Ok(())
    }

    /// Delete a transaction, returning it if it existed
    pub fn delete(&self, id: TransactionId) -> Result<Option<Transaction>, EzMoneyError> {
        let mut data = self.data.write().map_err(lock_poisoned)?;
        let mut by_category = self.by_category.write().map_err(lock_poisoned)?;

        let removed = data.remove(&id);
        if let Some(cat_id) = removed.as_ref().and_then(|t| t.category_id) {
            if let Some(ids) = by_category.get_mut(&cat_id) {
                ids.retain(|&tid| tid != id);
            }
        }
        Ok(removed)
    }

    /// Delete every transaction, returning them
    pub fn delete_all(&self) -> Result<Vec<Transaction>, EzMoneyError> {
        let mut data = self.data.write().map_err(lock_poisoned)?;
        let mut by_category = self.by_category.write().map_err(lock_poisoned)?;

        by_category.clear();
        Ok(data.drain().map(|(_, txn)| txn).collect())
    }

    /// Delete every transaction referencing one of `category_ids`
    pub fn delete_by_categories(
        &self,
        category_ids: &[CategoryId],
    ) -> Result<Vec<Transaction>, EzMoneyError> {
        let mut data = self.data.write().map_err(lock_poisoned)?;
        let mut by_category = self.by_category.write().map_err(lock_poisoned)?;

        let doomed: HashSet<TransactionId> = category_ids
            .iter()
            .filter_map(|cat_id| by_category.remove(cat_id))
            .flatten()
            .collect();

        Ok(doomed.into_iter().filter_map(|id| data.remove(&id)).collect())
    }

    pub fn count(&self) -> Result<usize, EzMoneyError> {
        let data = self.data.read().map_err(lock_poisoned)?;
        Ok(data.len())
    }
}
