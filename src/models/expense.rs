//! Expense entry model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::ids::EntryId;
use super::money::Money;

/// A single recorded expense
///
/// The category is fixed at creation; only the amount can change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// Identifier assigned by the ledger
    pub id: EntryId,

    /// Category the expense is charged to
    pub category: ExpenseCategory,

    /// Amount spent, never negative
    pub amount: Money,

    /// When the entry was recorded
    pub created_at: DateTime<Utc>,

    /// When the amount was last changed
    pub updated_at: DateTime<Utc>,
}

impl ExpenseEntry {
    /// Create a new entry
    pub(crate) fn new(id: EntryId, category: ExpenseCategory, amount: Money) -> Self {
        let now = Utc::now();
        Self {
            id,
            category,
            amount,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the amount
    pub(crate) fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for ExpenseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.id, self.category.label(), self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_set_amount_keeps_identity() {
        let mut entry = ExpenseEntry::new(
            EntryId::from_raw(1),
            ExpenseCategory::Groceries,
            Money::new(dec!(80)),
        );
        entry.set_amount(Money::new(dec!(12.5)));

        assert_eq!(entry.id, EntryId::from_raw(1));
        assert_eq!(entry.category, ExpenseCategory::Groceries);
        assert_eq!(entry.amount, Money::new(dec!(12.50)));
        assert!(entry.updated_at >= entry.created_at);
    }

    #[test]
    fn test_display() {
        let entry = ExpenseEntry::new(
            EntryId::from_raw(3),
            ExpenseCategory::Housing,
            Money::from_units(450),
        );
        assert_eq!(entry.to_string(), "exp-3 🏠 Housing €450.00");
    }
}
