//! Period totals
//!
//! Sums of `amount` over every transaction whose timestamp falls at or after
//! the start of the current day, ISO week, month or year. Period starts are
//! computed in the time zone of the `now` passed in.

use chrono::{DateTime, TimeZone, Utc};

use crate::display::format_amount;
use crate::error::EzResult;
use crate::models::{SummaryPeriod, Transaction};
use crate::storage::Storage;

/// Sum of `amount` over transactions matching `predicate`
pub fn total<F>(transactions: &[Transaction], predicate: F) -> f64
where
    F: Fn(&Transaction) -> bool,
{
    transactions
        .iter()
        .filter(|t| predicate(t))
        .map(|t| t.amount)
        .sum()
}

/// Sum of `amount` over transactions at or after `start`
pub fn total_since<Tz: TimeZone>(transactions: &[Transaction], start: &DateTime<Tz>) -> f64 {
    let start = start.with_timezone(&Utc);
    total(transactions, |t| t.timestamp >= start)
}

/// Sum for the `period` containing `now`; `AllTime` sums everything
pub fn total_for_period<Tz: TimeZone>(
    transactions: &[Transaction],
    period: SummaryPeriod,
    now: &DateTime<Tz>,
) -> f64 {
    match period.start(now) {
        Some(start) => total_since(transactions, &start),
        None => total(transactions, |_| true),
    }
}

/// Totals for every summary period at once
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PeriodTotals {
    pub today: f64,
    pub this_week: f64,
    pub this_month: f64,
    pub this_year: f64,
    pub all_time: f64,
}

impl PeriodTotals {
    /// Compute all totals in a single pass over `transactions`
    pub fn compute<Tz: TimeZone>(transactions: &[Transaction], now: &DateTime<Tz>) -> Self {
        let start = |period: SummaryPeriod| period.start(now).map(|s| s.with_timezone(&Utc));
        let today = start(SummaryPeriod::Today);
        let week = start(SummaryPeriod::ThisWeek);
        let month = start(SummaryPeriod::ThisMonth);
        let year = start(SummaryPeriod::ThisYear);

        let within = |s: Option<DateTime<Utc>>, ts: DateTime<Utc>| s.is_some_and(|s| ts >= s);

        let mut totals = Self::default();
        for txn in transactions {
            let ts = txn.timestamp;
            totals.all_time += txn.amount;
            if within(year, ts) {
                totals.this_year += txn.amount;
            }
            if within(month, ts) {
                totals.this_month += txn.amount;
            }
            if within(week, ts) {
                totals.this_week += txn.amount;
            }
            if within(today, ts) {
                totals.today += txn.amount;
            }
        }
        totals
    }

    /// Compute totals over everything in storage
    pub fn generate<Tz: TimeZone>(storage: &Storage, now: &DateTime<Tz>) -> EzResult<Self> {
        let transactions = storage.query_all_transactions()?;
        Ok(Self::compute(&transactions, now))
    }

    pub fn get(&self, period: SummaryPeriod) -> f64 {
        match period {
            SummaryPeriod::Today => self.today,
            SummaryPeriod::ThisWeek => self.this_week,
            SummaryPeriod::ThisMonth => self.this_month,
            SummaryPeriod::ThisYear => self.this_year,
            SummaryPeriod::AllTime => self.all_time,
        }
    }

    /// Format the totals for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Spending Summary\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');

        for period in SummaryPeriod::all() {
            output.push_str(&format!(
                "{:<20} {:>19}\n",
                period.label(),
                format_amount(self.get(*period), currency)
            ));
        }

        output
    }
}
