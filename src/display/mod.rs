//! Display formatting for terminal output
//!
//! Provides utilities for formatting the ledger, balances, and settlements
//! for terminal display.

pub mod ledger;
pub mod settlement;

pub use ledger::{format_expense_details, format_expense_list, format_participant_list};
pub use settlement::{format_balances, format_settlement};

use crate::models::Money;

/// Arrow between payer and payee in transfer lines
pub const TRANSFER_ARROW: &str = "→";

/// Width of the rule under section headings
pub const RULE_WIDTH: usize = 40;

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a net amount with an explicit "+" for positive values
pub fn format_signed(amount: Money, symbol: &str) -> String {
    if amount.is_positive() {
        format!("+{}", amount.format_with_symbol(symbol))
    } else {
        amount.format_with_symbol(symbol)
    }
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_signed() {
        assert_eq!(format_signed(Money::from_cents(100050), "$"), "+$1000.50");
        assert_eq!(format_signed(Money::from_cents(-20000), "$"), "-$200.00");
        assert_eq!(format_signed(Money::zero(), "$"), "$0.00");
    }

    #[test]
    fn test_separator() {
        assert_eq!(separator(3), "───");
        assert_eq!(separator(RULE_WIDTH).chars().count(), 40);
        assert!(separator(0).is_empty());
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("hello", 3), "...");
        assert_eq!(truncate("Café au lait", 7), "Café...");
    }
}
