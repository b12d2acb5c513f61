//! Monthly budget tracker
//!
//! This library provides the core of a single-month budget tracker: an
//! expense ledger keyed by stable entry ids, and a pure aggregation engine
//! that compares spending against income, a savings goal and per-category
//! budgets.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money, categories, expense entries and budget configuration
//! - `services`: The expense ledger and the aggregation engine
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `audit`: Audit logging of session mutations
//! - `display`: Text rendering of ledgers and overviews
//! - `export`: CSV export of the category breakdown
//! - `cli`: Interactive session and one-shot command handlers
//! - `log`: Diagnostic logging setup
//!
//! # Example
//!
//! ```rust
//! use monthly_budget::models::{BudgetConfiguration, ExpenseCategory};
//! use monthly_budget::services::{summarize, Ledger};
//!
//! let mut ledger = Ledger::new();
//! ledger.add(ExpenseCategory::Housing, "450").unwrap();
//! ledger.add(ExpenseCategory::Groceries, "80").unwrap();
//!
//! let overview = summarize(ledger.snapshot(), &BudgetConfiguration::default());
//! assert_eq!(overview.total_spent.to_string(), "€530.00");
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod log;
pub mod models;
pub mod services;

pub use error::{BudgetError, BudgetResult};
