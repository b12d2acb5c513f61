//! Report export
//!
//! Writes the budget breakdown to CSV. The ledger itself is never persisted.

pub mod csv;

pub use self::csv::export_breakdown_csv;
