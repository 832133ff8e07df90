//! Report CLI commands

use chrono::Local;

use crate::config::Settings;
use crate::error::EzResult;
use crate::models::SummaryPeriod;
use crate::reports::{CategoryBreakdown, PeriodTotals};
use crate::storage::Storage;

/// Print totals for every period, using the local calendar
pub fn handle_summary(storage: &Storage, settings: &Settings) -> EzResult<()> {
    let totals = PeriodTotals::generate(storage, &Local::now())?;
    print!("{}", totals.format_terminal(&settings.currency_code));
    Ok(())
}

/// Print the per-category breakdown for `period`
pub fn handle_breakdown(
    storage: &Storage,
    settings: &Settings,
    period: SummaryPeriod,
) -> EzResult<()> {
    let report = CategoryBreakdown::generate(storage, period, &Local::now())?;
    print!("{}", report.format_terminal(&settings.currency_code));
    Ok(())
}

/// Print the most recent audit log entries, oldest first
pub fn handle_audit(storage: &Storage, limit: usize) -> EzResult<()> {
    let entries = storage.audit().read_recent(limit)?;
    if entries.is_empty() {
        println!("No audit entries.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
