//! Display formatting for terminal output

pub mod category;
pub mod transaction;

pub use category::format_category_tree;
pub use transaction::{
    format_extraction, format_transaction_details, format_transaction_list, format_transaction_row,
};

/// Amount with two decimals followed by the currency code
pub fn format_amount(amount: f64, currency: &str) -> String {
    format!("{:.2} {}", amount, currency)
}

/// Pad or cut `s` to exactly `width` characters
pub(crate) fn fit(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        format!("{:width$}", s, width = width)
    } else {
        let cut: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
