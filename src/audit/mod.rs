//! Audit logging for the expense tracker
//!
//! Records every add, update and delete with before/after values in an
//! append-only, line-delimited JSON log. This is the tool's persistent log of
//! what happened to the data file.
//!
//! ```rust,ignore
//! use expense_cli::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::added(&expense))?;
//! ```

mod entry;
mod logger;

pub use entry::{Action, AuditEntry};
pub use logger::AuditLogger;
