//! Core data models for the budget tracker
//!
//! Value types shared by the ledger and the aggregator: money, categories,
//! expense entries and the caller-owned budget configuration.

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use budget::{BudgetConfiguration, BudgetValidationError};
pub use category::{CategoryParseError, ExpenseCategory};
pub use expense::ExpenseEntry;
pub use ids::{EntryId, EntryIdParseError};
pub use money::{Money, MoneyParseError};
