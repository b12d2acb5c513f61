//! Budget aggregation
//!
//! Turns a ledger snapshot and a budget configuration into a
//! [`BudgetOverview`]. Pure: no inputs are mutated and identical inputs give
//! identical overviews. Sums and differences saturate instead of panicking,
//! so any slice of entries can be summarized.

use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use crate::models::{BudgetConfiguration, ExpenseCategory, ExpenseEntry, Money};

/// A percentage that is undefined when its denominator is zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Percentage {
    Value(Decimal),
    /// The denominator was zero
    Unavailable,
    /// Defined, but larger than a decimal can hold
    OutOfRange,
}

impl Percentage {
    /// `part` as a percentage of `whole`
    pub fn of(part: Money, whole: Money) -> Self {
        if whole.is_zero() {
            return Self::Unavailable;
        }
        part.amount()
            .checked_div(whole.amount())
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map(Self::Value)
            .unwrap_or(Self::OutOfRange)
    }

    /// The value, if defined and representable
    pub fn value(&self) -> Option<Decimal> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Unavailable | Self::OutOfRange => None,
        }
    }

    /// True when the denominator was zero
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => {
                let mut rounded =
                    v.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
                rounded.rescale(1);
                write!(f, "{}%", rounded)
            }
            Self::Unavailable => write!(f, "N/A"),
            Self::OutOfRange => write!(f, ">7.9e28%"),
        }
    }
}

/// Where savings stand against the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavingsStatus {
    /// Spending exceeds income by `overspent`
    Deficit { overspent: Money },
    /// Savings reach the goal
    GoalMet,
    /// Savings are positive but `shortfall` short of the goal
    BelowGoal { shortfall: Money },
}

/// Whether a category stayed within its cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// Spending exceeded the cap by `over`
    OverBudget { over: Money },
    /// `available` can still be spent
    WithinBudget { available: Money },
}

/// Derived figures for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: ExpenseCategory,
    pub actual_spent: Money,
    pub budgeted: Money,
    /// `budgeted - actual_spent`, negative when over budget
    pub remaining: Money,
    pub percent_used: Percentage,
    /// Share of the month's total spending
    pub share_of_spending: Percentage,
    pub status: BudgetStatus,
}

impl CategorySummary {
    pub fn is_over_budget(&self) -> bool {
        matches!(self.status, BudgetStatus::OverBudget { .. })
    }
}

/// Result of one aggregation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetOverview {
    pub income: Money,
    pub savings_goal: Money,
    pub total_spent: Money,
    /// `income - total_spent`
    pub savings: Money,
    pub savings_status: SavingsStatus,
    /// One entry per fixed category, canonical order
    pub per_category: Vec<CategorySummary>,
}

impl BudgetOverview {
    /// Summary for a single category
    pub fn category(&self, category: ExpenseCategory) -> Option<&CategorySummary> {
        self.per_category.iter().find(|s| s.category == category)
    }

    /// Categories that exceeded their cap
    pub fn over_budget(&self) -> impl Iterator<Item = &CategorySummary> {
        self.per_category.iter().filter(|s| s.is_over_budget())
    }

    /// Whether any money was spent
    pub fn has_spending(&self) -> bool {
        !self.total_spent.is_zero()
    }
}

/// Classify savings against the goal
pub fn savings_status(savings: Money, goal: Money) -> SavingsStatus {
    if savings.is_negative() {
        SavingsStatus::Deficit { overspent: -savings }
    } else if savings >= goal {
        SavingsStatus::GoalMet
    } else {
        SavingsStatus::BelowGoal {
            shortfall: goal.saturating_sub(savings),
        }
    }
}

/// Classify a category's remaining budget
pub fn budget_status(remaining: Money) -> BudgetStatus {
    if remaining.is_negative() {
        BudgetStatus::OverBudget {
            over: remaining.abs(),
        }
    } else {
        BudgetStatus::WithinBudget {
            available: remaining,
        }
    }
}

/// Compute the overview for a ledger snapshot
pub fn summarize(entries: &[ExpenseEntry], config: &BudgetConfiguration) -> BudgetOverview {
    let total_spent: Money = entries.iter().map(|e| e.amount).sum();
    let savings = config.income.saturating_sub(total_spent);

    let mut spent_by_category: BTreeMap<ExpenseCategory, Money> = BTreeMap::new();
    for entry in entries {
        let spent = spent_by_category.entry(entry.category).or_default();
        *spent = spent.saturating_add(entry.amount);
    }

    let per_category = config
        .caps()
        .map(|(category, budgeted)| {
            let actual_spent = spent_by_category
                .get(&category)
                .copied()
                .unwrap_or_default();
            let remaining = budgeted.saturating_sub(actual_spent);
            CategorySummary {
                category,
                actual_spent,
                budgeted,
                remaining,
                percent_used: Percentage::of(actual_spent, budgeted),
                share_of_spending: Percentage::of(actual_spent, total_spent),
                status: budget_status(remaining),
            }
        })
        .collect();

    let savings_status = savings_status(savings, config.savings_goal);
    debug!(entries = entries.len(), %total_spent, %savings, ?savings_status, "budget summarized");

    BudgetOverview {
        income: config.income,
        savings_goal: config.savings_goal,
        total_spent,
        savings,
        savings_status,
        per_category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryId;
    use crate::services::Ledger;
    use rust_decimal_macros::dec;

    fn scenario_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add(ExpenseCategory::Housing, "450").unwrap();
        ledger.add(ExpenseCategory::Groceries, "80").unwrap();
        ledger
    }

    #[test]
    fn test_reference_scenario() {
        let ledger = scenario_ledger();
        let config = BudgetConfiguration::default();

        let overview = summarize(ledger.snapshot(), &config);

        assert_eq!(overview.total_spent, Money::from_units(530));
        assert_eq!(overview.savings, Money::from_units(970));
        assert_eq!(overview.savings_status, SavingsStatus::GoalMet);

        let housing = overview.category(ExpenseCategory::Housing).unwrap();
        assert_eq!(housing.remaining, Money::from_units(-350));
        assert_eq!(
            housing.status,
            BudgetStatus::OverBudget {
                over: Money::from_units(350)
            }
        );
        assert_eq!(housing.percent_used, Percentage::Value(dec!(450)));

        let groceries = overview.category(ExpenseCategory::Groceries).unwrap();
        assert_eq!(groceries.remaining, Money::from_units(20));
        assert_eq!(
            groceries.status,
            BudgetStatus::WithinBudget {
                available: Money::from_units(20)
            }
        );

        for category in [
            ExpenseCategory::Utilities,
            ExpenseCategory::Transportation,
            ExpenseCategory::Entertainment,
            ExpenseCategory::Other,
        ] {
            let summary = overview.category(category).unwrap();
            assert_eq!(summary.actual_spent, Money::zero());
            assert_eq!(summary.remaining, Money::from_units(100));
            assert_eq!(summary.percent_used, Percentage::Value(Decimal::ZERO));
        }
        assert_eq!(overview.over_budget().count(), 1);
    }

    #[test]
    fn test_every_category_in_canonical_order() {
        let overview = summarize(&[], &BudgetConfiguration::default());

        let order: Vec<_> = overview.per_category.iter().map(|s| s.category).collect();
        assert_eq!(order, ExpenseCategory::all());
        assert_eq!(overview.total_spent, Money::zero());
        assert!(!overview.has_spending());
        assert!(overview
            .per_category
            .iter()
            .all(|s| s.share_of_spending.is_unavailable()));
    }

    #[test]
    fn test_zero_budget_is_unavailable_not_error() {
        let config = BudgetConfiguration::default()
            .with_cap(ExpenseCategory::Entertainment, Money::zero());
        let mut ledger = Ledger::new();
        ledger.add(ExpenseCategory::Other, "10").unwrap();

        let overview = summarize(ledger.snapshot(), &config);

        let entertainment = overview.category(ExpenseCategory::Entertainment).unwrap();
        assert!(entertainment.percent_used.is_unavailable());
        assert_eq!(entertainment.percent_used.to_string(), "N/A");
        assert_eq!(
            entertainment.status,
            BudgetStatus::WithinBudget {
                available: Money::zero()
            }
        );

        let other = overview.category(ExpenseCategory::Other).unwrap();
        assert_eq!(other.percent_used, Percentage::Value(dec!(10)));
        assert_eq!(overview.per_category.len(), 6);
    }

    #[test]
    fn test_spending_against_zero_cap() {
        let config = BudgetConfiguration::default()
            .with_cap(ExpenseCategory::Entertainment, Money::zero());
        let mut ledger = Ledger::new();
        ledger.add(ExpenseCategory::Entertainment, "15").unwrap();

        let overview = summarize(ledger.snapshot(), &config);

        let entertainment = overview.category(ExpenseCategory::Entertainment).unwrap();
        assert_eq!(entertainment.percent_used, Percentage::Unavailable);
        assert_eq!(entertainment.remaining, Money::from_units(-15));
        assert_eq!(
            entertainment.status,
            BudgetStatus::OverBudget {
                over: Money::from_units(15)
            }
        );
        assert_eq!(entertainment.share_of_spending, Percentage::Value(dec!(100)));
    }

    #[test]
    fn test_largest_amounts_summarize_without_panic() {
        let largest = "79228162514264337593543950335";
        let mut ledger = Ledger::new();
        ledger.add(ExpenseCategory::Housing, largest).unwrap();
        assert!(ledger.add(ExpenseCategory::Housing, largest).is_err());

        let overview = summarize(ledger.snapshot(), &BudgetConfiguration::default());
        assert_eq!(overview.total_spent, Money::new(Decimal::MAX));
        assert!(matches!(overview.savings_status, SavingsStatus::Deficit { .. }));

        // Slices not built through a ledger saturate instead
        let entries = vec![
            ExpenseEntry::new(
                EntryId::from_raw(1),
                ExpenseCategory::Housing,
                Money::new(Decimal::MAX),
            ),
            ExpenseEntry::new(
                EntryId::from_raw(2),
                ExpenseCategory::Housing,
                Money::new(Decimal::MAX),
            ),
        ];
        let mut config = BudgetConfiguration::default();
        config.income = Money::new(Decimal::MIN);
        let overview = summarize(&entries, &config);
        assert_eq!(overview.total_spent, Money::new(Decimal::MAX));
        assert_eq!(overview.savings, Money::new(Decimal::MIN));
        assert!(overview
            .category(ExpenseCategory::Housing)
            .unwrap()
            .is_over_budget());
    }

    #[test]
    fn test_percentage_out_of_range_is_not_unavailable() {
        let tiny_cap = Money::new(dec!(0.01));
        let percent = Percentage::of(Money::new(Decimal::MAX), tiny_cap);

        assert_eq!(percent, Percentage::OutOfRange);
        assert!(!percent.is_unavailable());
        assert_eq!(percent.value(), None);
        assert_eq!(percent.to_string(), ">7.9e28%");

        assert_eq!(
            Percentage::of(Money::from_units(450), Money::from_units(100)),
            Percentage::Value(dec!(450))
        );
        assert_eq!(
            Percentage::of(Money::from_units(5), Money::zero()),
            Percentage::Unavailable
        );
    }

    #[test]
    fn test_deficit() {
        let mut config = BudgetConfiguration::default();
        config.income = Money::from_units(1000);
        let mut ledger = Ledger::new();
        ledger.add(ExpenseCategory::Housing, "700").unwrap();
        ledger.add(ExpenseCategory::Transportation, "500").unwrap();

        let overview = summarize(ledger.snapshot(), &config);

        assert_eq!(overview.savings, Money::from_units(-200));
        assert_eq!(
            overview.savings_status,
            SavingsStatus::Deficit {
                overspent: Money::from_units(200)
            }
        );
    }

    #[test]
    fn test_below_goal_carries_shortfall() {
        assert_eq!(
            savings_status(Money::from_units(150), Money::from_units(200)),
            SavingsStatus::BelowGoal {
                shortfall: Money::from_units(50)
            }
        );
        assert_eq!(
            savings_status(Money::from_units(200), Money::from_units(200)),
            SavingsStatus::GoalMet
        );
        assert_eq!(
            savings_status(Money::zero(), Money::zero()),
            SavingsStatus::GoalMet
        );
    }

    #[test]
    fn test_share_of_spending() {
        let overview = summarize(scenario_ledger().snapshot(), &BudgetConfiguration::default());
        let groceries = overview.category(ExpenseCategory::Groceries).unwrap();
        assert_eq!(groceries.share_of_spending.to_string(), "15.1%");
    }

    #[test]
    fn test_summarize_is_deterministic() {
        let ledger = scenario_ledger();
        let config = BudgetConfiguration::default();

        let first = summarize(ledger.snapshot(), &config);
        let second = summarize(ledger.snapshot(), &config);

        assert_eq!(first, second);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_full_precision_until_display() {
        let mut ledger = Ledger::new();
        for _ in 0..3 {
            ledger.add(ExpenseCategory::Other, "0.333").unwrap();
        }
        let overview = summarize(ledger.snapshot(), &BudgetConfiguration::default());
        assert_eq!(overview.total_spent, Money::new(dec!(0.999)));
        assert_eq!(overview.total_spent.to_string(), "€1.00");
    }
}
