//! Informational commands: categories, configuration, audit history, init

use std::io::Write;

use crate::audit::AuditLogger;
use crate::cli::session::format_budget;
use crate::config::{BudgetPaths, Settings};
use crate::error::BudgetResult;
use crate::models::ExpenseCategory;

/// Handle `budget categories`
pub fn handle_categories_command<W: Write>(
    settings: &Settings,
    output: &mut W,
) -> BudgetResult<()> {
    writeln!(output, "Expense Categories")?;
    for category in ExpenseCategory::all() {
        writeln!(
            output,
            "  {:<18} budget {}",
            category.label(),
            settings
                .budget
                .cap(*category)
                .format_with_symbol(&settings.currency_symbol)
        )?;
    }
    Ok(())
}

/// Handle `budget config`
pub fn handle_config_command<W: Write>(
    paths: &BudgetPaths,
    settings: &Settings,
    output: &mut W,
) -> BudgetResult<()> {
    writeln!(output, "Monthly Budget Configuration")?;
    writeln!(output, "============================")?;
    writeln!(output, "Settings file: {}", paths.settings_file().display())?;
    writeln!(output, "Audit log:     {}", paths.audit_log().display())?;
    writeln!(output, "Currency:      {}", settings.currency_symbol)?;
    writeln!(output)?;
    write!(output, "{}", format_budget(&settings.budget, &settings.currency_symbol))?;
    Ok(())
}

/// Handle `budget history`
pub fn handle_history_command<W: Write>(
    logger: &AuditLogger,
    count: usize,
    output: &mut W,
) -> BudgetResult<()> {
    let entries = logger.read_recent(count)?;
    if entries.is_empty() {
        writeln!(output, "No audit entries in {}", logger.path().display())?;
        return Ok(());
    }
    for entry in entries {
        writeln!(output, "{}", entry.format_human_readable())?;
    }
    Ok(())
}

/// Handle `budget init`: write the default settings file
pub fn handle_init_command<W: Write>(
    paths: &BudgetPaths,
    settings: &Settings,
    output: &mut W,
) -> BudgetResult<()> {
    settings.save(paths)?;
    writeln!(output, "Settings written to: {}", paths.settings_file().display())?;
    writeln!(
        output,
        "Edit income, savings goal and category budgets there, or change them inside a session."
    )?;
    Ok(())
}
