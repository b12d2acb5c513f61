//! Configuration module for the budget tracker
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings (currency symbol, starting budget figures)

pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::Settings;
