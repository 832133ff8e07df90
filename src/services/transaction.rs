//! Transaction service
//!
//! Turns free-text lines into stored transactions and handles deletion.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::{EzMoneyError, EzResult};
use crate::models::Transaction;
use crate::parse::{Extraction, TransactionExtractor};
use crate::storage::Storage;

use super::category::CategoryService;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
    extractor: TransactionExtractor,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self::with_extractor(
            storage,
            settings,
            TransactionExtractor::new(settings.currency_code.clone()),
        )
    }

    pub fn with_extractor(
        storage: &'a Storage,
        settings: &'a Settings,
        extractor: TransactionExtractor,
    ) -> Self {
        Self {
            storage,
            settings,
            extractor,
        }
    }

    /// Extract a transaction from `input` without storing it
    pub fn preview(&self, input: &str, now: DateTime<Utc>) -> EzResult<Extraction> {
        let directory = CategoryService::new(self.storage, self.settings).directory()?;
        Ok(self.extractor.extract(input, now, &directory))
    }

    /// Extract a transaction from `input` and store it
    pub fn record(&self, input: &str, now: DateTime<Utc>) -> EzResult<Extraction> {
        let extraction = self.preview(input, now)?;
        debug!(
            amount_found = extraction.amount_found,
            category_found = extraction.category_found,
            degraded = extraction.degraded,
            "extracted transaction"
        );

        self.storage.insert_transaction(extraction.transaction.clone())?;
        info!(
            id = %extraction.transaction.id,
            amount = extraction.transaction.amount,
            "recorded transaction"
        );
        Ok(extraction)
    }

    /// Transactions newest first, optionally capped at `limit`
    pub fn list(&self, limit: Option<usize>) -> EzResult<Vec<Transaction>> {
        let mut transactions = self.storage.query_all_transactions()?;
        if let Some(limit) = limit {
            transactions.truncate(limit);
        }
        Ok(transactions)
    }

    /// Find a transaction by full or short id
    pub fn find(&self, identifier: &str) -> EzResult<Option<Transaction>> {
        self.storage.transactions.find(identifier)
    }

    /// Delete the transaction named by `identifier`
    pub fn delete(&self, identifier: &str) -> EzResult<Transaction> {
        let txn = self
            .find(identifier)?
            .ok_or_else(|| EzMoneyError::transaction_not_found(identifier))?;
        self.storage.delete_transaction(txn.id)
    }

    /// Delete every transaction
    pub fn clear_all(&self) -> EzResult<usize> {
        self.storage.delete_all_transactions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::EzMoneyPaths;
    use crate::parse::AMOUNT_PATTERN;
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let paths = EzMoneyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        let settings = Settings::default();
        CategoryService::new(&storage, &settings).ensure_seeded().unwrap();
        (temp_dir, storage, settings)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_record_stores_extraction() {
        let (_temp_dir, storage, settings) = setup();
        let service = TransactionService::new(&storage, &settings);

        let extraction = service.record("lunch 12.5k /Have Fun|", now()).unwrap();
        let have_fun = storage.categories.get_by_name("Have Fun").unwrap().unwrap();

        let stored = storage.query_all_transactions().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], extraction.transaction);
        assert_eq!(stored[0].category_id, Some(have_fun.id));
        assert_eq!(stored[0].currency, "USD");
    }

    #[test]
    fn test_preview_does_not_store() {
        let (_temp_dir, storage, settings) = setup();
        let service = TransactionService::new(&storage, &settings);

        let extraction = service.preview("coffee 3k", now()).unwrap();
        assert_eq!(extraction.transaction.amount, 3_000.0);
        assert!(storage.query_all_transactions().unwrap().is_empty());
    }

    #[test]
    fn test_currency_from_settings() {
        let (_temp_dir, storage, _) = setup();
        let settings = Settings {
            currency_code: "VND".into(),
            ..Settings::default()
        };
        let service = TransactionService::new(&storage, &settings);

        let extraction = service.record("pho 45k", now()).unwrap();
        assert_eq!(extraction.transaction.currency, "VND");
    }

    #[test]
    fn test_degraded_extraction_is_still_stored() {
        let (_temp_dir, storage, settings) = setup();
        let extractor = TransactionExtractor::with_patterns(AMOUNT_PATTERN, "(", "USD");
        let service = TransactionService::with_extractor(&storage, &settings, extractor);

        let extraction = service.record("taxi 40", now()).unwrap();
        assert!(extraction.degraded);
        assert_eq!(storage.query_all_transactions().unwrap()[0].memo, "taxi 40");
    }

    #[test]
    fn test_list_newest_first_with_limit() {
        let (_temp_dir, storage, settings) = setup();
        let service = TransactionService::new(&storage, &settings);

        service.record("a 1", now()).unwrap();
        service.record("b 2", now() + Duration::hours(1)).unwrap();
        service.record("c 3", now() + Duration::hours(2)).unwrap();

        let listed = service.list(Some(2)).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].amount, 3.0);
        assert_eq!(listed[1].amount, 2.0);
        assert_eq!(service.list(None).unwrap().len(), 3);
    }

    #[test]
    fn test_delete_by_short_id() {
        let (_temp_dir, storage, settings) = setup();
        let service = TransactionService::new(&storage, &settings);
        let id = service.record("a 1", now()).unwrap().transaction.id;

        assert_eq!(service.delete(&id.to_string()).unwrap().id, id);
        assert!(service.delete(&id.to_string()).unwrap_err().is_not_found());
    }

    #[test]
    fn test_clear_all() {
        let (_temp_dir, storage, settings) = setup();
        let service = TransactionService::new(&storage, &settings);
        service.record("a 1", now()).unwrap();
        service.record("b 2", now()).unwrap();

        assert_eq!(service.clear_all().unwrap(), 2);
        assert!(service.list(None).unwrap().is_empty());
    }
}
