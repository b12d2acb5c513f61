//! Display formatting for terminal output
//!
//! Renders the expense list and the budget overview as plain text.

pub mod ledger;
pub mod overview;
pub mod report;

pub use ledger::format_expense_list;
pub use overview::{breakdown_rows, format_overview, BreakdownRow};
