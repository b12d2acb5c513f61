//! Budget overview rendering
//!
//! Lays out one [`BudgetOverview`] for the terminal: headline metrics, the
//! savings verdict, spending and budget bars, per-category remaining budget
//! and the full breakdown table.

use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use super::report::{double_separator, format_header, money_bar};
use crate::models::Money;
use crate::services::{BudgetOverview, BudgetStatus, CategorySummary, SavingsStatus};

const WIDTH: usize = 64;
const BAR_WIDTH: usize = 30;

/// One row of the full expense breakdown
#[derive(Debug, Clone, PartialEq, Eq, Tabled, Serialize)]
pub struct BreakdownRow {
    #[tabled(rename = "Category")]
    #[serde(rename = "Category")]
    pub category: String,

    #[tabled(rename = "Budgeted")]
    #[serde(rename = "Budgeted")]
    pub budgeted: String,

    #[tabled(rename = "Actual Spent")]
    #[serde(rename = "Actual Spent")]
    pub actual_spent: String,

    #[tabled(rename = "Remaining Budget")]
    #[serde(rename = "Remaining Budget")]
    pub remaining: String,

    #[tabled(rename = "% of Budget Used")]
    #[serde(rename = "% of Budget Used")]
    pub percent_used: String,
}

impl BreakdownRow {
    pub fn from_summary(summary: &CategorySummary, symbol: &str) -> Self {
        Self {
            category: summary.category.name().to_string(),
            budgeted: summary.budgeted.format_with_symbol(symbol),
            actual_spent: summary.actual_spent.format_with_symbol(symbol),
            remaining: summary.remaining.format_with_symbol(symbol),
            percent_used: summary.percent_used.to_string(),
        }
    }
}

/// Breakdown rows for every category in canonical order
pub fn breakdown_rows(overview: &BudgetOverview, symbol: &str) -> Vec<BreakdownRow> {
    overview
        .per_category
        .iter()
        .map(|s| BreakdownRow::from_summary(s, symbol))
        .collect()
}

/// The savings verdict shown under the metrics
pub fn savings_message(status: &SavingsStatus, symbol: &str) -> String {
    match status {
        SavingsStatus::Deficit { .. } => "⚠️  You're spending more than you earn!".to_string(),
        SavingsStatus::GoalMet => "✅ You've met your savings goal!".to_string(),
        SavingsStatus::BelowGoal { shortfall } => format!(
            "📉 You're {} away from reaching your savings goal.",
            shortfall.format_with_symbol(symbol)
        ),
    }
}

/// The remaining-budget line for one category
pub fn remaining_message(summary: &CategorySummary, symbol: &str) -> String {
    match summary.status {
        BudgetStatus::OverBudget { over } => format!(
            "❌ Over budget in {} by {}",
            summary.category.label(),
            over.format_with_symbol(symbol)
        ),
        BudgetStatus::WithinBudget { available } => format!(
            "✅ You can still spend {} in {}",
            available.format_with_symbol(symbol),
            summary.category.label()
        ),
    }
}

/// Render the whole overview
pub fn format_overview(overview: &BudgetOverview, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("📊 Budget Summary\n");
    output.push_str(&double_separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "💵 Monthly Income     {:>14}\n",
        overview.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "📟 Total Expenses     {:>14}\n",
        overview.total_spent.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "💰 Estimated Savings  {:>14}\n",
        overview.savings.format_with_symbol(symbol)
    ));
    output.push('\n');
    output.push_str(&savings_message(&overview.savings_status, symbol));
    output.push_str("\n\n");

    output.push_str(&format_header("📊 Spending by Category", WIDTH));
    output.push('\n');
    for summary in &overview.per_category {
        output.push_str(&format!(
            "{:<18} {} {:>7}\n",
            summary.category.label(),
            money_bar(summary.actual_spent, overview.total_spent, BAR_WIDTH),
            summary.share_of_spending.to_string()
        ));
    }
    output.push('\n');

    let scale = overview
        .per_category
        .iter()
        .flat_map(|s| [s.actual_spent, s.budgeted])
        .max()
        .unwrap_or_else(Money::zero);

    output.push_str(&format_header("📈 Expenses vs. Budget", WIDTH));
    output.push('\n');
    for summary in &overview.per_category {
        output.push_str(&format!(
            "{:<18} spent  {} {:>12}\n",
            summary.category.label(),
            money_bar(summary.actual_spent, scale, BAR_WIDTH),
            summary.actual_spent.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<18} budget {} {:>12}\n",
            "",
            money_bar(summary.budgeted, scale, BAR_WIDTH),
            summary.budgeted.format_with_symbol(symbol)
        ));
    }
    output.push('\n');

    output.push_str(&format_header("📃 Category Budget Remaining", WIDTH));
    output.push('\n');
    for summary in &overview.per_category {
        output.push_str(&remaining_message(summary, symbol));
        output.push('\n');
    }
    output.push('\n');

    output.push_str("🧾 Full Expense Breakdown\n");
    let mut table = Table::new(breakdown_rows(overview, symbol));
    table.with(Style::rounded());
    output.push_str(&table.to_string());
    output.push('\n');

    output
}
