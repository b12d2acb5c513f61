//! Expense list display formatting

use crate::models::ExpenseEntry;

/// Format the session's expenses, one row per entry in ledger order
pub fn format_expense_list(entries: &[ExpenseEntry], symbol: &str) -> String {
    if entries.is_empty() {
        return "No expenses recorded yet.\n\nUse 'add <category> <amount>' to record one."
            .to_string();
    }

    let mut output = String::new();
    output.push_str("🧾 All Expenses\n");
    output.push_str(&format!(
        "{:>3}  {:<8}  {:<18}  {:>12}\n",
        "#", "ID", "Category", "Amount"
    ));
    output.push_str(&format!("{:-<3}  {:-<8}  {:-<18}  {:->12}\n", "", "", "", ""));

    for (index, entry) in entries.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}  {:<8}  {:<18}  {:>12}\n",
            index + 1,
            entry.id.to_string(),
            entry.category.label(),
            entry.amount.format_with_symbol(symbol)
        ));
    }

    output
}
