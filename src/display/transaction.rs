//! Transaction display formatting
//!
//! Register-style listing, single-transaction details, and the confirmation
//! printed after an entry is recorded.

use std::collections::HashMap;

use crate::models::{Category, CategoryId, Transaction};
use crate::parse::Extraction;

use super::{fit, format_amount};

fn category_name<'a>(names: &HashMap<CategoryId, &'a str>, txn: &Transaction) -> &'a str {
    txn.category_id
        .and_then(|id| names.get(&id).copied())
        .unwrap_or("(uncategorized)")
}

fn name_map(categories: &[Category]) -> HashMap<CategoryId, &str> {
    categories.iter().map(|c| (c.id, c.name.as_str())).collect()
}

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, category: &str, date_format: &str) -> String {
    format!(
        "{} {:16} {:>16} {} {}",
        txn.id,
        txn.timestamp.format(date_format).to_string(),
        format_amount(txn.amount, &txn.currency),
        fit(category, 18),
        txn.memo.trim()
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_list(
    transactions: &[Transaction],
    categories: &[Category],
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let names = name_map(categories);
    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:16} {:>16} {:18} {}\n",
        "ID", "Date", "Amount", "Category", "Memo"
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, category_name(&names, txn), date_format));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(
    txn: &Transaction,
    categories: &[Category],
    date_format: &str,
) -> String {
    let names = name_map(categories);
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.timestamp.format(date_format)));
    output.push_str(&format!("Amount:      {}\n", format_amount(txn.amount, &txn.currency)));
    output.push_str(&format!("Category:    {}\n", category_name(&names, txn)));
    output.push_str(&format!("Type:        {}\n", txn.kind));

    if !txn.memo.trim().is_empty() {
        output.push_str(&format!("Memo:        {}\n", txn.memo.trim()));
    }

    output
}

/// Confirmation for a freshly recorded entry, with a note for each fallback taken
pub fn format_extraction(
    extraction: &Extraction,
    categories: &[Category],
    date_format: &str,
) -> String {
    let mut output = format_transaction_details(&extraction.transaction, categories, date_format);

    if extraction.degraded {
        output.push_str("Note: entry could not be parsed and was kept as a memo.\n");
        return output;
    }
    if !extraction.amount_found {
        output.push_str("Note: no amount found, recorded as 0.\n");
    }
    if !extraction.category_found {
        output.push_str("Note: no matching category tag, used the default category.\n");
    }

    output
}
