//! In-memory category directory
//!
//! A snapshot of every category (roots and subcategories in one flat list)
//! that the extractor resolves `/Name|` tags against.

use crate::models::Category;

/// Name resolution used by the extractor
pub trait CategoryLookup {
    /// First category whose name equals `name` exactly
    fn lookup(&self, name: &str) -> Option<&Category>;

    /// Fallback for entries without a resolvable tag
    fn default_category(&self) -> Option<&Category>;
}

/// Flattened category set plus the configured default name
#[derive(Debug, Clone)]
pub struct CategoryDirectory {
    categories: Vec<Category>,
    default_name: String,
}

impl CategoryDirectory {
    pub fn new(categories: Vec<Category>, default_name: impl Into<String>) -> Self {
        Self {
            categories,
            default_name: default_name.into(),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }
}

impl CategoryLookup for CategoryDirectory {
    fn lookup(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    fn default_category(&self) -> Option<&Category> {
        self.lookup(&self.default_name)
    }
}
