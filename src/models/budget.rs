//! Budget configuration model
//!
//! Income, savings goal and the per-category caps. The caller owns it and
//! hands an immutable reference to each aggregation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::category::ExpenseCategory;
use super::money::Money;

/// The user's monthly figures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetConfiguration {
    /// Monthly net income
    pub income: Money,

    /// Amount the user wants left over at the end of the month
    pub savings_goal: Money,

    /// Spending cap per category
    ///
    /// Every fixed category has an entry; a category missing from a
    /// deserialized file is treated as a zero cap.
    #[serde(default)]
    category_budgets: BTreeMap<ExpenseCategory, Money>,
}

impl BudgetConfiguration {
    /// Create a configuration with the same cap for every category
    pub fn new(income: Money, savings_goal: Money, default_cap: Money) -> Self {
        let category_budgets = ExpenseCategory::all()
            .iter()
            .map(|c| (*c, default_cap))
            .collect();
        Self {
            income,
            savings_goal,
            category_budgets,
        }
    }

    /// Builder-style cap override
    pub fn with_cap(mut self, category: ExpenseCategory, cap: Money) -> Self {
        self.category_budgets.insert(category, cap);
        self
    }

    /// Get the cap for a category
    pub fn cap(&self, category: ExpenseCategory) -> Money {
        self.category_budgets
            .get(&category)
            .copied()
            .unwrap_or_default()
    }

    /// Set the cap for a category
    pub fn set_cap(&mut self, category: ExpenseCategory, cap: Money) {
        self.category_budgets.insert(category, cap);
    }

    /// Caps for every category in canonical order
    pub fn caps(&self) -> impl Iterator<Item = (ExpenseCategory, Money)> + '_ {
        ExpenseCategory::all().iter().map(|c| (*c, self.cap(*c)))
    }

    /// Sum of all category caps
    pub fn total_budgeted(&self) -> Money {
        self.caps().map(|(_, cap)| cap).sum()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.income.is_negative() {
            return Err(BudgetValidationError::NegativeIncome);
        }

        if self.savings_goal.is_negative() {
            return Err(BudgetValidationError::NegativeSavingsGoal);
        }

        if let Some((category, _)) = self.caps().find(|(_, cap)| cap.is_negative()) {
            return Err(BudgetValidationError::NegativeCap(category));
        }

        Ok(())
    }
}

impl Default for BudgetConfiguration {
    fn default() -> Self {
        Self::new(
            Money::from_units(1500),
            Money::from_units(200),
            Money::from_units(100),
        )
    }
}

/// Validation errors for budget configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeIncome,
    NegativeSavingsGoal,
    NegativeCap(ExpenseCategory),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeIncome => write!(f, "Income cannot be negative"),
            Self::NegativeSavingsGoal => write!(f, "Savings goal cannot be negative"),
            Self::NegativeCap(category) => {
                write!(f, "Budget for {} cannot be negative", category)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
