//! Per-category breakdown
//!
//! Groups transactions by the category they reference (by id, so two
//! categories sharing a name stay separate) and sums each group.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};

use crate::display::format_amount;
use crate::error::EzResult;
use crate::models::{Category, CategoryId, SummaryPeriod, Transaction};
use crate::storage::Storage;

/// Sum of `amount` per referenced category
///
/// Categories without transactions don't appear. Uncategorized transactions
/// are left out.
pub fn totals_by_category(transactions: &[Transaction]) -> HashMap<CategoryId, f64> {
    let mut totals = HashMap::new();
    for txn in transactions {
        if let Some(cat_id) = txn.category_id {
            *totals.entry(cat_id).or_insert(0.0) += txn.amount;
        }
    }
    totals
}

/// One row of the breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category_id: CategoryId,
    pub category_name: String,
    pub total: f64,
    pub transaction_count: usize,
    /// Share of the categorized total, 0-100
    pub percentage: f64,
}

/// Spending per category for one summary period
#[derive(Debug, Clone)]
pub struct CategoryBreakdown {
    pub period: SummaryPeriod,
    /// Largest total first
    pub rows: Vec<CategoryTotal>,
    pub categorized_total: f64,
    pub uncategorized_total: f64,
    pub uncategorized_count: usize,
}

impl CategoryBreakdown {
    /// Build the breakdown of `transactions` for the `period` containing `now`
    pub fn compute<Tz: TimeZone>(
        transactions: &[Transaction],
        categories: &[Category],
        period: SummaryPeriod,
        now: &DateTime<Tz>,
    ) -> Self {
        let start = period.start(now).map(|s| s.with_timezone(&Utc));
        let in_period: Vec<Transaction> = transactions
            .iter()
            .filter(|t| start.map_or(true, |s| t.timestamp >= s))
            .cloned()
            .collect();

        let mut counts: HashMap<CategoryId, usize> = HashMap::new();
        let mut uncategorized_total = 0.0;
        let mut uncategorized_count = 0;
        for txn in &in_period {
            match txn.category_id {
                Some(cat_id) => *counts.entry(cat_id).or_insert(0) += 1,
                None => {
                    uncategorized_total += txn.amount;
                    uncategorized_count += 1;
                }
            }
        }

        let totals = totals_by_category(&in_period);
        let categorized_total: f64 = totals.values().sum();

        let names: HashMap<CategoryId, &str> =
            categories.iter().map(|c| (c.id, c.name.as_str())).collect();

        let mut rows: Vec<CategoryTotal> = totals
            .into_iter()
            .map(|(category_id, total)| CategoryTotal {
                category_id,
                category_name: names
                    .get(&category_id)
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| category_id.to_string()),
                total,
                transaction_count: counts.get(&category_id).copied().unwrap_or(0),
                percentage: if categorized_total == 0.0 {
                    0.0
                } else {
                    total / categorized_total * 100.0
                },
            })
            .collect();

        rows.sort_by(|a, b| {
            b.total
                .total_cmp(&a.total)
                .then_with(|| a.category_name.cmp(&b.category_name))
        });

        Self {
            period,
            rows,
            categorized_total,
            uncategorized_total,
            uncategorized_count,
        }
    }

    /// Build the breakdown over everything in storage
    pub fn generate<Tz: TimeZone>(
        storage: &Storage,
        period: SummaryPeriod,
        now: &DateTime<Tz>,
    ) -> EzResult<Self> {
        let transactions = storage.query_all_transactions()?;
        let categories = storage.query_all_categories()?;
        Ok(Self::compute(&transactions, &categories, period, now))
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Category Breakdown: {}\n", self.period));
        output.push_str(&"=".repeat(64));
        output.push('\n');

        if self.rows.is_empty() && self.uncategorized_count == 0 {
            output.push_str("No transactions in this period.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<28} {:>18} {:>8} {:>7}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<28} {:>18} {:>8} {:>6.1}%\n",
                row.category_name,
                format_amount(row.total, currency),
                row.transaction_count,
                row.percentage
            ));
        }

        if self.uncategorized_count > 0 {
            output.push_str(&format!(
                "{:<28} {:>18} {:>8}\n",
                "UNCATEGORIZED",
                format_amount(self.uncategorized_total, currency),
                self.uncategorized_count
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>18}\n",
            "TOTAL",
            format_amount(self.categorized_total + self.uncategorized_total, currency)
        ));

        output
    }
}
