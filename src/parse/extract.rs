//! Free-text transaction extraction
//!
//! A line like `lunch 12.5k /Have Fun|` is split in one pass into an amount
//! (`12500`), a category tag (`Have Fun`) and a memo (whatever is left,
//! `"lunch  "`). When the line mentions several amounts or several tags, the
//! rightmost of each is used and the others stay in the memo untouched.
//!
//! Extraction never fails. A token that doesn't parse leaves the amount at
//! zero, an unknown tag falls back to the default category, and if the
//! patterns themselves can't be built the whole line becomes the memo.

use chrono::{DateTime, Utc};
use regex::Regex;
use tracing::{debug, error};

use super::amount::parse_amount;
use super::directory::CategoryLookup;
use crate::models::Transaction;

/// A whole-word run of ASCII digits, optional decimals, optional k/m/b unit
pub const AMOUNT_PATTERN: &str = r"(?i)\b[0-9]+(?:\.[0-9]+)?[kmb]?\b";

/// `/`, the shortest run of anything, `|`
pub const CATEGORY_TAG_PATTERN: &str = r"/.*?\|";

/// Outcome of extracting one line
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub transaction: Transaction,
    /// An amount token was found and parsed
    pub amount_found: bool,
    /// A tag resolved to a category (the default fallback doesn't count)
    pub category_found: bool,
    /// Patterns were unavailable and the line was kept verbatim
    pub degraded: bool,
}

struct Patterns {
    amount: Regex,
    category_tag: Regex,
}

/// Splits input lines into transactions
pub struct TransactionExtractor {
    patterns: Option<Patterns>,
    currency: String,
}

impl TransactionExtractor {
    /// Create an extractor stamping `currency` onto every transaction
    pub fn new(currency: impl Into<String>) -> Self {
        Self::with_patterns(AMOUNT_PATTERN, CATEGORY_TAG_PATTERN, currency)
    }

    /// Create an extractor from custom amount and tag patterns
    ///
    /// A pattern that fails to compile is logged and leaves the extractor in
    /// its degraded mode rather than returning an error.
    pub fn with_patterns(
        amount_pattern: &str,
        category_tag_pattern: &str,
        currency: impl Into<String>,
    ) -> Self {
        let patterns = match (Regex::new(amount_pattern), Regex::new(category_tag_pattern)) {
            (Ok(amount), Ok(category_tag)) => Some(Patterns {
                amount,
                category_tag,
            }),
            (Err(e), _) | (_, Err(e)) => {
                error!(error = %e, "failed to compile extraction patterns, input will be kept verbatim");
                None
            }
        };

        Self {
            patterns,
            currency: currency.into(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.patterns.is_none()
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Extract a transaction from `input`, timestamped `now`
    pub fn extract<L>(&self, input: &str, now: DateTime<Utc>, categories: &L) -> Extraction
    where
        L: CategoryLookup + ?Sized,
    {
        let mut transaction = Transaction::new(now, 0.0, self.currency.clone());

        let Some(patterns) = &self.patterns else {
            transaction.memo = input.to_string();
            return Extraction {
                transaction,
                amount_found: false,
                category_found: false,
                degraded: true,
            };
        };

        let mut remaining = input.to_string();

        let mut amount_found = false;
        if let Some(token) = take_last_match(&patterns.amount, &mut remaining) {
            match parse_amount(&token) {
                Some(amount) => {
                    transaction.amount = amount;
                    amount_found = true;
                }
                None => debug!(token = %token, "amount token did not parse"),
            }
        }

        let mut category_found = false;
        if let Some(tag) = take_last_match(&patterns.category_tag, &mut remaining) {
            let name = strip_tag_delimiters(&tag);
            match categories.lookup(name) {
                Some(category) => {
                    transaction.category_id = Some(category.id);
                    category_found = true;
                }
                None => debug!(name = %name, "category tag did not match any category"),
            }
        }

        if !category_found {
            transaction.category_id = categories.default_category().map(|c| c.id);
        }

        transaction.memo = remaining;

        Extraction {
            transaction,
            amount_found,
            category_found,
            degraded: false,
        }
    }
}

/// Remove the rightmost match of `re` from `text` and return it
fn take_last_match(re: &Regex, text: &mut String) -> Option<String> {
    let (range, matched) = re
        .find_iter(text.as_str())
        .last()
        .map(|m| (m.range(), m.as_str().to_string()))?;
    text.replace_range(range, "");
    Some(matched)
}

/// `/Have Fun|` -> `Have Fun`; interior whitespace is kept
fn strip_tag_delimiters(tag: &str) -> &str {
    let name = tag.strip_prefix('/').unwrap_or(tag);
    name.strip_suffix('|').unwrap_or(name)
}
