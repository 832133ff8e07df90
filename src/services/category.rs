//! Category service
//!
//! Seeds the built-in taxonomy, resolves names, and exposes the default
//! category configured in settings.

use tracing::info;

use crate::audit::{AuditEntry, EntityType};
use crate::config::Settings;
use crate::error::{EzMoneyError, EzResult};
use crate::models::{seed_taxonomy, Category, CategoryId};
use crate::parse::CategoryDirectory;
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

/// A category with its depth in the tree (roots are depth 0)
#[derive(Debug, Clone)]
pub struct CategoryTreeEntry {
    pub category: Category,
    pub depth: usize,
    /// Transactions referencing this category directly
    pub transaction_count: usize,
}

impl<'a> CategoryService<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Insert the seed taxonomy if there are no categories yet
    ///
    /// Safe to call on every startup. Returns whether anything was inserted.
    pub fn ensure_seeded(&self) -> EzResult<bool> {
        let seed = seed_taxonomy();
        let entries: Vec<_> = seed
            .iter()
            .map(|c| AuditEntry::create(EntityType::Category, c.id.to_string(), Some(c.name.clone()), c))
            .collect();

        if !self.storage.categories.seed_if_empty(seed)? {
            return Ok(false);
        }

        self.storage.categories.save()?;
        self.storage.audit().log_batch(&entries)?;
        info!(count = entries.len(), "seeded default categories");
        Ok(true)
    }

    /// First category named exactly `name`
    pub fn lookup(&self, name: &str) -> EzResult<Option<Category>> {
        self.storage.categories.get_by_name(name)
    }

    /// The category named by `settings.default_category_name`, if present
    pub fn default_category(&self) -> EzResult<Option<Category>> {
        self.lookup(&self.settings.default_category_name)
    }

    /// Find a category by exact name or by id
    pub fn find(&self, identifier: &str) -> EzResult<Option<Category>> {
        if let Some(category) = self.lookup(identifier)? {
            return Ok(Some(category));
        }

        match identifier.parse::<CategoryId>() {
            Ok(id) => self.storage.categories.get(id),
            Err(_) => {
                let all = self.storage.categories.get_all()?;
                Ok(all.into_iter().find(|c| c.id.matches(identifier)))
            }
        }
    }

    /// Snapshot of every category for the extractor
    pub fn directory(&self) -> EzResult<CategoryDirectory> {
        Ok(CategoryDirectory::new(
            self.storage.categories.get_all()?,
            self.settings.default_category_name.clone(),
        ))
    }

    /// All categories depth-first, children in sort order
    pub fn list_tree(&self) -> EzResult<Vec<CategoryTreeEntry>> {
        let all = self.storage.categories.get_all()?;
        let mut tree = Vec::with_capacity(all.len());

        let mut stack: Vec<(Category, usize)> = all
            .iter()
            .filter(|c| c.is_root())
            .rev()
            .map(|c| (c.clone(), 0))
            .collect();

        while let Some((category, depth)) = stack.pop() {
            let children = self.storage.categories.get_children(category.id)?;
            stack.extend(children.into_iter().rev().map(|c| (c, depth + 1)));
            let transaction_count = self.storage.transactions.get_by_category(category.id)?.len();
            tree.push(CategoryTreeEntry {
                category,
                depth,
                transaction_count,
            });
        }

        Ok(tree)
    }

    /// Delete a category together with its subcategories and transactions
    pub fn delete(&self, identifier: &str) -> EzResult<(Category, usize, usize)> {
        let category = self
            .find(identifier)?
            .ok_or_else(|| EzMoneyError::category_not_found(identifier))?;
        let (categories, transactions) = self.storage.delete_category(category.id)?;
        Ok((category, categories, transactions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::EzMoneyPaths;
    use crate::parse::CategoryLookup;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = EzMoneyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_ensure_seeded_is_idempotent() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = CategoryService::new(&storage, &settings);

        assert!(service.ensure_seeded().unwrap());
        assert!(!service.ensure_seeded().unwrap());

        let names: Vec<_> = storage
            .query_all_categories()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names.len(), 7);
        assert_eq!(names.iter().filter(|n| *n == "To Live").count(), 1);
        assert_eq!(storage.audit().read_all().unwrap().len(), 7);
    }

    #[test]
    fn test_seed_survives_reload() {
        let (temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        CategoryService::new(&storage, &settings).ensure_seeded().unwrap();

        let paths = EzMoneyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reopened = Storage::new(paths).unwrap();
        reopened.load_all().unwrap();
        assert!(!CategoryService::new(&reopened, &settings).ensure_seeded().unwrap());
        assert_eq!(reopened.categories.count().unwrap(), 7);
    }

    #[test]
    fn test_no_seed_when_categories_exist() {
        let (_temp_dir, storage) = create_test_storage();
        storage.insert_category(Category::new("Groceries")).unwrap();
        let settings = Settings::default();
        let service = CategoryService::new(&storage, &settings);

        assert!(!service.ensure_seeded().unwrap());
        assert!(service.default_category().unwrap().is_none());
    }

    #[test]
    fn test_default_category_follows_settings() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings {
            default_category_name: "Have Fun".into(),
            ..Settings::default()
        };
        let service = CategoryService::new(&storage, &settings);

        assert!(service.default_category().unwrap().is_none());
        service.ensure_seeded().unwrap();
        assert_eq!(service.default_category().unwrap().unwrap().name, "Have Fun");

        let directory = service.directory().unwrap();
        assert_eq!(directory.default_category().unwrap().name, "Have Fun");
    }

    #[test]
    fn test_find_by_name_and_id() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = CategoryService::new(&storage, &settings);
        service.ensure_seeded().unwrap();

        let community = service.find("Community").unwrap().unwrap();
        assert_eq!(service.find(&community.id.to_string()).unwrap().unwrap().id, community.id);
        assert!(service.find("community").unwrap().is_none());
    }

    #[test]
    fn test_list_tree_order() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = CategoryService::new(&storage, &settings);
        service.ensure_seeded().unwrap();

        let tree = service.list_tree().unwrap();
        let rendered: Vec<_> = tree
            .iter()
            .map(|e| (e.category.name.as_str(), e.depth))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("Expense Base", 0),
                ("To Live", 1),
                ("Have Fun", 1),
                ("Family Happiness", 1),
                ("Financial Freedom", 1),
                ("Community", 1),
                ("Income Base", 0),
            ]
        );
    }

    #[test]
    fn test_list_tree_counts_transactions() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = CategoryService::new(&storage, &settings);
        service.ensure_seeded().unwrap();

        let fun = service.lookup("Have Fun").unwrap().unwrap();
        let mut txn = crate::models::Transaction::new(chrono::Utc::now(), 5.0, "USD");
        txn.category_id = Some(fun.id);
        storage.insert_transaction(txn).unwrap();

        let tree = service.list_tree().unwrap();
        let counts: Vec<_> = tree
            .iter()
            .filter(|e| e.transaction_count > 0)
            .map(|e| (e.category.name.as_str(), e.transaction_count))
            .collect();
        assert_eq!(counts, vec![("Have Fun", 1)]);
    }

    #[test]
    fn test_delete_by_name() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = CategoryService::new(&storage, &settings);
        service.ensure_seeded().unwrap();

        let (removed, categories, transactions) = service.delete("Expense Base").unwrap();
        assert_eq!(removed.name, "Expense Base");
        assert_eq!((categories, transactions), (6, 0));
        assert!(service.delete("Expense Base").unwrap_err().is_not_found());
    }
}
