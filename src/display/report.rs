//! Formatting helpers for terminal reports

use rust_decimal::prelude::ToPrimitive;

use crate::models::Money;

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a money amount scaled against `max`
pub fn money_bar(value: Money, max: Money, width: usize) -> String {
    format_bar(
        value.amount().to_f64().unwrap_or(0.0),
        max.amount().to_f64().unwrap_or(0.0),
        width,
    )
}

/// Format a header with an underline
pub fn format_header(title: &str, width: usize) -> String {
    format!("{}\n{}", title, separator(width))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(bar.chars().count(), 10);
    }

    #[test]
    fn test_format_bar_clamps() {
        assert_eq!(format_bar(450.0, 100.0, 4), "████");
        assert_eq!(format_bar(10.0, 0.0, 3), "░░░");
    }

    #[test]
    fn test_money_bar() {
        let bar = money_bar(Money::from_units(25), Money::from_units(100), 8);
        assert_eq!(bar, "██░░░░░░");
    }

    #[test]
    fn test_header() {
        assert_eq!(format_header("Title", 3), "Title\n───");
    }
}
