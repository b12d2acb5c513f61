//! Interactive budgeting session
//!
//! A session owns one ledger and one budget configuration for as long as it
//! runs. Each input line is one command, parsed with clap in multicall mode.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::Settings;
use crate::display::{format_expense_list, format_overview};
use crate::error::{BudgetError, BudgetResult};
use crate::export::export_breakdown_csv;
use crate::models::{BudgetConfiguration, EntryId, ExpenseCategory, Money};
use crate::services::{summarize, Ledger};

/// One line of session input
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Commands available inside a session
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Record an expense (e.g. "add groceries 12,50")
    Add {
        /// Category name
        category: ExpenseCategory,
        /// Amount; comma or dot as decimal separator
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Change the amount of an expense
    Edit {
        /// Expense id (e.g. exp-3)
        id: EntryId,
        /// New amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Remove an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense id (e.g. exp-3)
        id: EntryId,
    },

    /// List all expenses
    #[command(alias = "ls")]
    List,

    /// Remove every expense
    Clear,

    /// Set the monthly net income
    Income {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Set the savings goal
    Goal {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Set the budget for a category
    Cap {
        category: ExpenseCategory,
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show income, savings goal and category budgets
    Config,

    /// Calculate the budget overview
    #[command(alias = "calc")]
    Calculate {
        /// Also export the breakdown to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Whether the session keeps reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Which budget figure a command changes
enum BudgetField {
    Income,
    Goal,
    Cap(ExpenseCategory),
}

/// State of one running session
pub struct Session {
    ledger: Ledger,
    budget: BudgetConfiguration,
    currency_symbol: String,
    audit: Option<AuditLogger>,
    prompt: bool,
}

impl Session {
    /// Start a session from the user's settings
    pub fn new(settings: &Settings) -> Self {
        Self {
            ledger: Ledger::new(),
            budget: settings.budget_configuration(),
            currency_symbol: settings.currency_symbol.clone(),
            audit: None,
            prompt: false,
        }
    }

    /// Record every mutation to an audit log
    pub fn with_audit_log(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Print a prompt before reading each line
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn budget(&self) -> &BudgetConfiguration {
        &self.budget
    }

    /// Read commands until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> BudgetResult<()> {
        writeln!(
            output,
            "Monthly budget session. Type 'help' for commands, 'quit' to leave."
        )?;

        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(output, "budget> ")?;
                output.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let tokens = match shell_words::split(line) {
                Ok(tokens) => tokens,
                Err(e) => {
                    writeln!(output, "Error: {}", e)?;
                    continue;
                }
            };
            let parsed = match SessionLine::try_parse_from(tokens) {
                Ok(parsed) => parsed,
                Err(e) => {
                    write!(output, "{}", e)?;
                    continue;
                }
            };

            match self.execute(parsed.command, output) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => writeln!(output, "Error: {}", e)?,
            }
        }

        info!(entries = self.ledger.len(), "session ended");
        Ok(())
    }

    /// Apply one command
    pub fn execute<W: Write>(
        &mut self,
        command: SessionCommand,
        output: &mut W,
    ) -> BudgetResult<Flow> {
        debug!(?command, "session command");
        let symbol = self.currency_symbol.clone();

        match command {
            SessionCommand::Add { category, amount } => {
                match self.ledger.add(category, &amount) {
                    Ok(id) => {
                        let entry = self
                            .ledger
                            .get(id)
                            .ok_or_else(|| BudgetError::expense_not_found(id.to_string()))?;
                        writeln!(
                            output,
                            "Added {} to {} ({})",
                            entry.amount.format_with_symbol(&symbol),
                            category.label(),
                            id
                        )?;
                        self.audit(&[AuditEntry::expense_created(entry)], output)?;
                    }
                    Err(BudgetError::Parse(e)) => {
                        writeln!(output, "❌ Please enter a valid number: {}", e)?;
                    }
                    Err(e) => return Err(e),
                }
            }

            SessionCommand::Edit { id, amount } => {
                let before = self
                    .ledger
                    .get(id)
                    .cloned()
                    .ok_or_else(|| BudgetError::expense_not_found(id.to_string()))?;
                match self.ledger.edit(id, &amount) {
                    Ok(previous) => {
                        let after = self
                            .ledger
                            .get(id)
                            .ok_or_else(|| BudgetError::expense_not_found(id.to_string()))?;
                        writeln!(
                            output,
                            "Updated {}: {} -> {}",
                            id,
                            previous.format_with_symbol(&symbol),
                            after.amount.format_with_symbol(&symbol)
                        )?;
                        self.audit(&[AuditEntry::expense_updated(&before, after)], output)?;
                    }
                    Err(BudgetError::Parse(e)) => {
                        writeln!(
                            output,
                            "⚠️  Kept {} for {}: {}",
                            before.amount.format_with_symbol(&symbol),
                            id,
                            e
                        )?;
                    }
                    Err(e) => return Err(e),
                }
            }

            SessionCommand::Delete { id } => {
                let removed = self.ledger.delete(id)?;
                writeln!(
                    output,
                    "Deleted {} ({} {})",
                    id,
                    removed.category.label(),
                    removed.amount.format_with_symbol(&symbol)
                )?;
                self.audit(&[AuditEntry::expense_deleted(&removed)], output)?;
            }

            SessionCommand::List => {
                write!(output, "{}", format_expense_list(self.ledger.snapshot(), &symbol))?;
                if !self.ledger.is_empty() {
                    writeln!(
                        output,
                        "\nTotal: {}",
                        self.ledger.total().format_with_symbol(&symbol)
                    )?;
                }
            }

            SessionCommand::Clear => {
                let removed = self.ledger.clear();
                writeln!(output, "Removed {} expenses.", removed.len())?;
                let entries: Vec<AuditEntry> =
                    removed.iter().map(AuditEntry::expense_deleted).collect();
                self.audit(&entries, output)?;
            }

            SessionCommand::Income { amount } => {
                self.update_budget(BudgetField::Income, &amount, output)?;
            }

            SessionCommand::Goal { amount } => {
                self.update_budget(BudgetField::Goal, &amount, output)?;
            }

            SessionCommand::Cap { category, amount } => {
                self.update_budget(BudgetField::Cap(category), &amount, output)?;
            }

            SessionCommand::Config => {
                write!(output, "{}", format_budget(&self.budget, &symbol))?;
            }

            SessionCommand::Calculate { output: path } => {
                if self.ledger.is_empty() {
                    writeln!(output, "No expenses recorded yet; add some before calculating.")?;
                    return Ok(Flow::Continue);
                }

                let overview = summarize(self.ledger.snapshot(), &self.budget);
                write!(output, "{}", format_overview(&overview, &symbol))?;

                if let Some(path) = path {
                    let file = File::create(&path).map_err(|e| {
                        BudgetError::Export(format!(
                            "Failed to create file {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    export_breakdown_csv(&overview, &symbol, BufWriter::new(file))?;
                    writeln!(output, "Breakdown exported to: {}", path.display())?;
                }
            }

            SessionCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Replace the budget configuration with one figure changed
    fn update_budget<W: Write>(
        &mut self,
        field: BudgetField,
        text: &str,
        output: &mut W,
    ) -> BudgetResult<()> {
        let amount = match Money::parse_non_negative(text) {
            Ok(amount) => amount,
            Err(e) => {
                writeln!(output, "❌ Please enter a valid number: {}", e)?;
                return Ok(());
            }
        };

        let symbol = &self.currency_symbol;
        let mut next = self.budget.clone();
        let (label, previous) = match field {
            BudgetField::Income => {
                let previous = next.income;
                next.income = amount;
                ("Income".to_string(), previous)
            }
            BudgetField::Goal => {
                let previous = next.savings_goal;
                next.savings_goal = amount;
                ("Savings goal".to_string(), previous)
            }
            BudgetField::Cap(category) => {
                let previous = next.cap(category);
                next.set_cap(category, amount);
                (format!("{} budget", category.label()), previous)
            }
        };
        next.validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        writeln!(
            output,
            "{} set to {}",
            label,
            amount.format_with_symbol(symbol)
        )?;
        let entry = AuditEntry::budget_updated(
            &self.budget,
            &next,
            format!(
                "{}: {} -> {}",
                label,
                previous.format_with_symbol(symbol),
                amount.format_with_symbol(symbol)
            ),
        );
        self.budget = next;
        self.audit(&[entry], output)
    }

    /// Record applied mutations
    ///
    /// Runs after the change is made, so a failed write cannot undo it: the
    /// failure is reported as a warning and the session carries on.
    fn audit<W: Write>(&self, entries: &[AuditEntry], output: &mut W) -> BudgetResult<()> {
        let Some(logger) = &self.audit else {
            return Ok(());
        };
        if let Err(e) = logger.log_batch(entries) {
            warn!(path = %logger.path().display(), error = %e, "audit write failed");
            writeln!(output, "⚠️  Change applied but not recorded in the audit log: {}", e)?;
        }
        Ok(())
    }
}

/// Format the session's budget figures
pub fn format_budget(budget: &BudgetConfiguration, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Monthly Net Income  {:>12}\n",
        budget.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Savings Goal        {:>12}\n",
        budget.savings_goal.format_with_symbol(symbol)
    ));
    output.push_str("\nCategory Budgets\n");
    for (category, cap) in budget.caps() {
        output.push_str(&format!(
            "  {:<18} {:>12}\n",
            category.label(),
            cap.format_with_symbol(symbol)
        ));
    }
    output.push_str(&format!(
        "  {:<18} {:>12}\n",
        "Total",
        budget.total_budgeted().format_with_symbol(symbol)
    ));
    output
}
