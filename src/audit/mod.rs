//! Audit trail for a budgeting session
//!
//! Records every add, edit and delete on the ledger, and every change to the
//! budget figures, as line-delimited JSON with before/after values.
//!
//! # Example
//!
//! ```rust,ignore
//! use monthly_budget::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let id = ledger.add(ExpenseCategory::Groceries, "80")?;
//! logger.log(&AuditEntry::expense_created(ledger.get(id).unwrap()))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
