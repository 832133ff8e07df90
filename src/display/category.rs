//! Category display formatting

use crate::services::CategoryTreeEntry;

/// Format categories as an indented tree
pub fn format_category_tree(entries: &[CategoryTreeEntry]) -> String {
    if entries.is_empty() {
        return "No categories found.\n\nRun 'ezmoney init' to create default categories.\n"
            .to_string();
    }

    let mut output = String::new();

    for (i, entry) in entries.iter().enumerate() {
        let count = if entry.transaction_count > 0 {
            format!(" ({})", entry.transaction_count)
        } else {
            String::new()
        };

        if entry.depth == 0 {
            output.push_str(&format!("{}{}  [{}]\n", entry.category.name, count, entry.category.id));
            continue;
        }

        // Last sibling when the next entry at this depth or shallower is shallower
        let is_last = entries[i + 1..]
            .iter()
            .find(|e| e.depth <= entry.depth)
            .map_or(true, |e| e.depth < entry.depth);
        let prefix = if is_last { "└── " } else { "├── " };

        output.push_str(&format!(
            "{}{}{}{}  [{}]\n",
            "    ".repeat(entry.depth - 1),
            prefix,
            entry.category.name,
            count,
            entry.category.id
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn entry(category: &Category, depth: usize) -> CategoryTreeEntry {
        CategoryTreeEntry {
            category: category.clone(),
            depth,
            transaction_count: 0,
        }
    }

    #[test]
    fn test_empty_tree() {
        assert!(format_category_tree(&[]).contains("ezmoney init"));
    }

    #[test]
    fn test_tree_connectors() {
        let root = Category::new("Expense Base");
        let a = Category::child_of("To Live", root.id, 0);
        let b = Category::child_of("Have Fun", root.id, 1);
        let other = Category::new("Income Base");

        let output = format_category_tree(&[
            entry(&root, 0),
            entry(&a, 1),
            entry(&b, 1),
            entry(&other, 0),
        ]);
        let lines: Vec<_> = output.lines().collect();

        assert!(lines[0].starts_with("Expense Base"));
        assert!(lines[1].starts_with("├── To Live"));
        assert!(lines[2].starts_with("└── Have Fun"));
        assert!(lines[3].starts_with("Income Base"));
    }

    #[test]
    fn test_counts_shown_when_nonzero() {
        let root = Category::new("Expense Base");
        let mut fun = entry(&Category::child_of("Have Fun", root.id, 0), 1);
        fun.transaction_count = 3;

        let output = format_category_tree(&[entry(&root, 0), fun]);
        assert!(output.contains("└── Have Fun (3)"));
        assert!(!output.contains("Expense Base ("));
    }
}
