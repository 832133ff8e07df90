//! Reports module for EzMoney
//!
//! Sums transaction amounts over the standard summary periods and per
//! category.

pub mod breakdown;
pub mod totals;

pub use breakdown::{totals_by_category, CategoryBreakdown, CategoryTotal};
pub use totals::{total, total_for_period, total_since, PeriodTotals};
