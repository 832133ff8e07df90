//! Transaction CLI commands

use chrono::Utc;

use crate::config::Settings;
use crate::display::{format_extraction, format_transaction_details, format_transaction_list};
use crate::error::{EzMoneyError, EzResult};
use crate::services::TransactionService;
use crate::storage::Storage;

/// Record one free-text entry; the words are joined with single spaces
pub fn handle_add(
    storage: &Storage,
    settings: &Settings,
    words: &[String],
    dry_run: bool,
) -> EzResult<()> {
    let service = TransactionService::new(storage, settings);
    let input = words.join(" ");
    let now = Utc::now();

    let extraction = if dry_run {
        service.preview(&input, now)?
    } else {
        service.record(&input, now)?
    };

    let categories = storage.query_all_categories()?;
    if dry_run {
        println!("Dry run, nothing was saved.");
    } else {
        println!("Recorded transaction.");
    }
    print!(
        "{}",
        format_extraction(&extraction, &categories, &settings.date_format)
    );
    Ok(())
}

pub fn handle_list(storage: &Storage, settings: &Settings, limit: Option<usize>) -> EzResult<()> {
    let service = TransactionService::new(storage, settings);
    let transactions = service.list(limit)?;
    let categories = storage.query_all_categories()?;

    print!(
        "{}",
        format_transaction_list(&transactions, &categories, &settings.date_format)
    );
    Ok(())
}

pub fn handle_show(storage: &Storage, settings: &Settings, identifier: &str) -> EzResult<()> {
    let service = TransactionService::new(storage, settings);
    let txn = service
        .find(identifier)?
        .ok_or_else(|| EzMoneyError::transaction_not_found(identifier))?;
    let categories = storage.query_all_categories()?;

    print!(
        "{}",
        format_transaction_details(&txn, &categories, &settings.date_format)
    );
    Ok(())
}

pub fn handle_delete(storage: &Storage, settings: &Settings, identifier: &str) -> EzResult<()> {
    let service = TransactionService::new(storage, settings);
    let txn = service.delete(identifier)?;
    println!("Deleted transaction {}", txn.id);
    Ok(())
}

pub fn handle_clear(storage: &Storage, settings: &Settings, confirmed: bool) -> EzResult<()> {
    if !confirmed {
        return Err(EzMoneyError::Validation(
            "Refusing to delete every transaction without --yes".into(),
        ));
    }

    let service = TransactionService::new(storage, settings);
    let count = service.clear_all()?;
    println!("Deleted {} transaction(s)", count);
    Ok(())
}
