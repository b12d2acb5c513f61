//! Audit entry data structures
//!
//! One record per session mutation: what changed, when, and the JSON state
//! of the affected entity before and after.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{BudgetConfiguration, ExpenseEntry};

/// Kind of mutation recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// What was mutated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Expense,
    Budget,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityType::Expense => write!(f, "Expense"),
            EntityType::Budget => write!(f, "Budget"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the mutation happened (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Expense id, or "budget" for configuration changes
    pub entity_id: String,

    /// Human-readable label, e.g. the expense category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Short description of the change, e.g. "amount: €80.00 -> €12.50"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn new(operation: Operation, entity_type: EntityType, entity_id: String) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id,
            entity_name: None,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    /// An expense was recorded
    pub fn expense_created(entry: &ExpenseEntry) -> Self {
        Self {
            entity_name: Some(entry.category.name().to_string()),
            after: serde_json::to_value(entry).ok(),
            ..Self::new(Operation::Create, EntityType::Expense, entry.id.to_string())
        }
    }

    /// An expense amount changed
    pub fn expense_updated(before: &ExpenseEntry, after: &ExpenseEntry) -> Self {
        Self {
            entity_name: Some(after.category.name().to_string()),
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            diff_summary: Some(format!("amount: {} -> {}", before.amount, after.amount)),
            ..Self::new(Operation::Update, EntityType::Expense, after.id.to_string())
        }
    }

    /// An expense was removed
    pub fn expense_deleted(entry: &ExpenseEntry) -> Self {
        Self {
            entity_name: Some(entry.category.name().to_string()),
            before: serde_json::to_value(entry).ok(),
            ..Self::new(Operation::Delete, EntityType::Expense, entry.id.to_string())
        }
    }

    /// The session's budget configuration was replaced
    pub fn budget_updated(
        before: &BudgetConfiguration,
        after: &BudgetConfiguration,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            diff_summary: Some(summary.into()),
            ..Self::new(Operation::Update, EntityType::Budget, "budget".to_string())
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, Money};
    use crate::services::Ledger;

    fn sample_entry() -> ExpenseEntry {
        let mut ledger = Ledger::new();
        let id = ledger.add(ExpenseCategory::Groceries, "80").unwrap();
        ledger.get(id).unwrap().clone()
    }

    #[test]
    fn test_expense_created() {
        let entry = AuditEntry::expense_created(&sample_entry());

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::Expense);
        assert_eq!(entry.entity_id, "exp-1");
        assert_eq!(entry.entity_name.as_deref(), Some("Groceries"));
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
    }

    #[test]
    fn test_expense_updated_summary() {
        let before = sample_entry();
        let mut after = before.clone();
        after.amount = Money::from_units(12);

        let entry = AuditEntry::expense_updated(&before, &after);

        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(
            entry.diff_summary.as_deref(),
            Some("amount: €80.00 -> €12.00")
        );
    }

    #[test]
    fn test_expense_deleted() {
        let entry = AuditEntry::expense_deleted(&sample_entry());
        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_budget_updated() {
        let before = BudgetConfiguration::default();
        let mut after = before.clone();
        after.income = Money::from_units(2000);

        let entry = AuditEntry::budget_updated(&before, &after, "income: €1500.00 -> €2000.00");
        assert_eq!(entry.entity_type, EntityType::Budget);
        assert_eq!(entry.entity_id, "budget");
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::expense_created(&sample_entry());

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"operation\":\"create\""));
        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.operation, Operation::Create);
        assert_eq!(deserialized.entity_type, EntityType::Expense);
    }

    #[test]
    fn test_human_readable_format() {
        let formatted = AuditEntry::expense_deleted(&sample_entry()).format_human_readable();
        assert!(formatted.contains("DELETE Expense exp-1 (Groceries)"));
    }
}
