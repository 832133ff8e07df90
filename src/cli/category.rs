//! Category CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_category_tree;
use crate::error::{EzMoneyError, EzResult};
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories as a tree
    List,

    /// Delete a category, its subcategories, and their transactions
    Delete {
        /// Category name or ID
        category: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

/// Handle a category command; no subcommand lists
pub fn handle_category_command(
    storage: &Storage,
    settings: &Settings,
    cmd: Option<CategoryCommands>,
) -> EzResult<()> {
    let service = CategoryService::new(storage, settings);

    match cmd.unwrap_or(CategoryCommands::List) {
        CategoryCommands::List => {
            print!("{}", format_category_tree(&service.list_tree()?));
        }

        CategoryCommands::Delete { category, yes } => {
            if !yes {
                return Err(EzMoneyError::Validation(format!(
                    "Deleting '{}' also deletes its subcategories and transactions; pass --yes to confirm",
                    category
                )));
            }

            let (deleted, categories, transactions) = service.delete(&category)?;
            println!(
                "Deleted category '{}' ({} categor{}, {} transaction(s))",
                deleted.name,
                categories,
                if categories == 1 { "y" } else { "ies" },
                transactions
            );
        }
    }

    Ok(())
}
