//! Service layer for the budget tracker
//!
//! The ledger owns and mutates expense entries; the aggregator derives the
//! budget overview from a ledger snapshot and a budget configuration.

pub mod aggregator;
pub mod ledger;

pub use aggregator::{
    summarize, BudgetOverview, BudgetStatus, CategorySummary, Percentage, SavingsStatus,
};
pub use ledger::{BatchOutcome, Ledger, PendingEdit};
