//! Category model and the built-in taxonomy
//!
//! Categories form a tree through `parent_id`. A category owns its
//! subcategories (deleting it deletes them) but only points at its parent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// A spending or income category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Display name, matched exactly by `/Name|` tags
    pub name: String,

    /// Parent category; `None` for a root
    #[serde(default)]
    pub parent_id: Option<CategoryId>,

    /// Sort order among siblings
    #[serde(default)]
    pub sort_order: i32,

    /// When the category was created
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Create a new root category
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            parent_id: None,
            sort_order: 0,
            created_at: Utc::now(),
        }
    }

    /// Create a new subcategory of `parent`
    pub fn child_of(name: impl Into<String>, parent: CategoryId, sort_order: i32) -> Self {
        let mut category = Self::new(name);
        category.parent_id = Some(parent);
        category.sort_order = sort_order;
        category
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Root categories of the built-in taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedRoot {
    ExpenseBase,
    IncomeBase,
}

impl SeedRoot {
    pub fn all() -> &'static [Self] {
        &[Self::ExpenseBase, Self::IncomeBase]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ExpenseBase => "Expense Base",
            Self::IncomeBase => "Income Base",
        }
    }

    /// Names of the subcategories created under this root
    pub fn children(&self) -> &'static [&'static str] {
        match self {
            Self::ExpenseBase => &[
                "To Live",
                "Have Fun",
                "Family Happiness",
                "Financial Freedom",
                "Community",
            ],
            Self::IncomeBase => &[],
        }
    }
}

/// Build the seed taxonomy, roots before their children
pub fn seed_taxonomy() -> Vec<Category> {
    let mut categories = Vec::new();

    for (i, root) in SeedRoot::all().iter().enumerate() {
        let mut parent = Category::new(root.name());
        parent.sort_order = i as i32;
        let parent_id = parent.id;
        categories.push(parent);

        for (j, child) in root.children().iter().enumerate() {
            categories.push(Category::child_of(*child, parent_id, j as i32));
        }
    }

    categories
}
