//! One-shot budget summary
//!
//! Builds a throwaway ledger from command-line arguments, prints the
//! overview and optionally exports the breakdown.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::display::format_overview;
use crate::error::{BudgetError, BudgetResult};
use crate::export::export_breakdown_csv;
use crate::models::{BudgetConfiguration, ExpenseCategory, Money};
use crate::services::{summarize, Ledger};

/// Arguments of `budget summary`
#[derive(Args, Debug, Default)]
pub struct SummaryArgs {
    /// Expense to record, as CATEGORY=AMOUNT (repeatable)
    #[arg(short, long = "expense", value_name = "CATEGORY=AMOUNT")]
    pub expenses: Vec<String>,

    /// Monthly net income (defaults to the configured value)
    #[arg(long, allow_hyphen_values = true)]
    pub income: Option<String>,

    /// Savings goal (defaults to the configured value)
    #[arg(long, allow_hyphen_values = true)]
    pub goal: Option<String>,

    /// Category budget override, as CATEGORY=AMOUNT (repeatable)
    #[arg(long = "cap", value_name = "CATEGORY=AMOUNT")]
    pub caps: Vec<String>,

    /// Export the breakdown to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Split "groceries=12,50" into a category and the amount text
fn parse_assignment(raw: &str) -> BudgetResult<(ExpenseCategory, &str)> {
    let (category, amount) = raw.split_once('=').ok_or_else(|| {
        BudgetError::Validation(format!("Expected CATEGORY=AMOUNT, got '{}'", raw))
    })?;
    let category = category
        .parse::<ExpenseCategory>()
        .map_err(|e| BudgetError::Validation(e.to_string()))?;
    Ok((category, amount))
}

fn parse_figure(label: &str, text: &str) -> BudgetResult<Money> {
    Money::parse_non_negative(text)
        .map_err(|e| BudgetError::Validation(format!("Invalid {}: {}", label, e)))
}

/// Apply the overrides to the configured budget
fn budget_from_args(settings: &Settings, args: &SummaryArgs) -> BudgetResult<BudgetConfiguration> {
    let mut budget = settings.budget_configuration();

    if let Some(income) = &args.income {
        budget.income = parse_figure("income", income)?;
    }
    if let Some(goal) = &args.goal {
        budget.savings_goal = parse_figure("savings goal", goal)?;
    }
    for raw in &args.caps {
        let (category, amount) = parse_assignment(raw)?;
        budget.set_cap(category, parse_figure("budget", amount)?);
    }

    budget
        .validate()
        .map_err(|e| BudgetError::Validation(e.to_string()))?;
    Ok(budget)
}

/// Handle `budget summary`
pub fn handle_summary_command<W: Write>(
    settings: &Settings,
    args: SummaryArgs,
    output: &mut W,
) -> BudgetResult<()> {
    let budget = budget_from_args(settings, &args)?;

    let mut ledger = Ledger::new();
    for raw in &args.expenses {
        let (category, amount) = parse_assignment(raw)?;
        ledger.add(category, amount).map_err(|e| {
            BudgetError::Validation(format!("Invalid expense '{}': {}", raw, e))
        })?;
    }

    let symbol = &settings.currency_symbol;
    let overview = summarize(ledger.snapshot(), &budget);
    write!(output, "{}", format_overview(&overview, symbol))?;

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            BudgetError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        export_breakdown_csv(&overview, symbol, BufWriter::new(file))?;
        writeln!(output, "Breakdown exported to: {}", path.display())?;
    }

    Ok(())
}
