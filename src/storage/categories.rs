//! Category repository for JSON storage
//!
//! Keeps categories in insertion order so that name lookups return the first
//! match deterministically.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::EzMoneyError;
use crate::models::{Category, CategoryId};

use super::file_io::{read_json, write_json_atomic};
use super::lock_poisoned;

/// Serializable category data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CategoryData {
    pub categories: Vec<Category>,
}

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    categories: RwLock<Vec<Category>>,
}

impl CategoryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: RwLock::new(Vec::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> Result<(), EzMoneyError> {
        let file_data: CategoryData = read_json(&self.path)?;
        let mut categories = self.categories.write().map_err(lock_poisoned)?;
        *categories = file_data.categories;
        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), EzMoneyError> {
        let categories = self.categories.read().map_err(lock_poisoned)?;
        let file_data = CategoryData {
            categories: categories.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, EzMoneyError> {
        let categories = self.categories.read().map_err(lock_poisoned)?;
        Ok(categories.iter().find(|c| c.id == id).cloned())
    }

    /// First category whose name equals `name` exactly
    pub fn get_by_name(&self, name: &str) -> Result<Option<Category>, EzMoneyError> {
        let categories = self.categories.read().map_err(lock_poisoned)?;
        Ok(categories.iter().find(|c| c.name == name).cloned())
    }

    /// All categories, roots and subcategories, in insertion order
    pub fn get_all(&self) -> Result<Vec<Category>, EzMoneyError> {
        let categories = self.categories.read().map_err(lock_poisoned)?;
        Ok(categories.clone())
    }

    /// Direct children of `parent`, by sort order
    pub fn get_children(&self, parent: CategoryId) -> Result<Vec<Category>, EzMoneyError> {
        let categories = self.categories.read().map_err(lock_poisoned)?;
        let mut children: Vec<_> = categories
            .iter()
            .filter(|c| c.parent_id == Some(parent))
            .cloned()
            .collect();
        children.sort_by_key(|c| c.sort_order);
        Ok(children)
    }

    /// `root` and everything below it, parents before children
    pub fn get_subtree(&self, root: CategoryId) -> Result<Vec<CategoryId>, EzMoneyError> {
        let categories = self.categories.read().map_err(lock_poisoned)?;

        let mut subtree = vec![root];
        let mut i = 0;
        while i < subtree.len() {
            let parent = subtree[i];
            let children: Vec<_> = categories
                .iter()
                .filter(|c| c.parent_id == Some(parent) && !subtree.contains(&c.id))
                .map(|c| c.id)
                .collect();
            subtree.extend(children);
            i += 1;
        }
        Ok(subtree)
    }

    /// Insert a category, replacing any existing one with the same id
    pub fn insert(&self, category: Category) -> Result<(), EzMoneyError> {
        let mut categories = self.categories.write().map_err(lock_poisoned)?;
        match categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => *existing = category,
            None => categories.push(category),
        }
        Ok(())
    }

    /// Insert `seed` only if there are no categories yet
    ///
    /// The emptiness check and the insert happen under one write lock.
    /// Returns whether the seed was inserted.
    pub fn seed_if_empty(&self, seed: Vec<Category>) -> Result<bool, EzMoneyError> {
        let mut categories = self.categories.write().map_err(lock_poisoned)?;
        if !categories.is_empty() {
            return Ok(false);
        }
        *categories = seed;
        Ok(true)
    }

    /// Remove every category in `ids`, returning the removed records
    pub fn remove_many(&self, ids: &[CategoryId]) -> Result<Vec<Category>, EzMoneyError> {
        let ids: HashSet<_> = ids.iter().copied().collect();
        let mut categories = self.categories.write().map_err(lock_poisoned)?;

        let (removed, kept): (Vec<_>, Vec<_>) =
            categories.drain(..).partition(|c| ids.contains(&c.id));
        *categories = kept;
        Ok(removed)
    }

    pub fn count(&self) -> Result<usize, EzMoneyError> {
        let categories = self.categories.read().map_err(lock_poisoned)?;
        Ok(categories.len())
    }
}
