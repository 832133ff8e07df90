//! Audit logging
//!
//! Every category and transaction created or deleted through `Storage` is
//! appended to `audit.log` with a JSON snapshot of the record.
//!
//! ```rust,ignore
//! use ezmoney::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(
//!     EntityType::Transaction,
//!     txn.id.to_string(),
//!     Some(txn.memo.clone()),
//!     &txn,
//! ))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
