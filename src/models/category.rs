//! Expense category model
//!
//! The category set is closed: six fixed members in a canonical order that
//! every summary follows.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A fixed expense category
///
/// Declaration order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Housing,
    Utilities,
    Transportation,
    Groceries,
    Entertainment,
    Other,
}

impl ExpenseCategory {
    /// Get all categories in canonical order
    pub fn all() -> &'static [Self] {
        &[
            Self::Housing,
            Self::Utilities,
            Self::Transportation,
            Self::Groceries,
            Self::Entertainment,
            Self::Other,
        ]
    }

    /// Get the display name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Utilities => "Utilities",
            Self::Transportation => "Transportation",
            Self::Groceries => "Groceries",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }

    /// Get the icon shown next to the name
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Housing => "🏠",
            Self::Utilities => "📺",
            Self::Transportation => "🚗",
            Self::Groceries => "🍜",
            Self::Entertainment => "🎉",
            Self::Other => "📦",
        }
    }

    /// Icon and name together, e.g. "🏠 Housing"
    pub fn label(&self) -> String {
        format!("{} {}", self.icon(), self.name())
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ExpenseCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CategoryParseError(needle.to_string()))
    }
}

/// Error returned for text that names no category
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Unknown category '{0}' (expected one of: \
     Housing, Utilities, Transportation, Groceries, Entertainment, Other)"
)]
pub struct CategoryParseError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_canonical_order() {
        let all = ExpenseCategory::all();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], ExpenseCategory::Housing);
        assert_eq!(all[5], ExpenseCategory::Other);

        let mut sorted = all.to_vec();
        sorted.sort();
        assert_eq!(sorted, all);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(
            "groceries".parse::<ExpenseCategory>().unwrap(),
            ExpenseCategory::Groceries
        );
        assert_eq!(
            " HOUSING ".parse::<ExpenseCategory>().unwrap(),
            ExpenseCategory::Housing
        );
        assert!("Travel".parse::<ExpenseCategory>().is_err());
    }

    #[test]
    fn test_label() {
        assert_eq!(ExpenseCategory::Housing.label(), "🏠 Housing");
        assert_eq!(ExpenseCategory::Other.to_string(), "Other");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ExpenseCategory::Transportation).unwrap();
        assert_eq!(json, "\"transportation\"");
        let back: ExpenseCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ExpenseCategory::Transportation);
    }
}
