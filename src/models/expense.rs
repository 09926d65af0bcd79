//! Expense model
//!
//! An expense records who paid, how much, and which participants share the
//! cost equally.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::Money;
use crate::error::{SplitError, SplitResult};

/// Reason shown for itemized lines whose expense has no description
pub const UNTITLED_ITEM: &str = "Untitled";

/// A shared expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, stable for the expense's lifetime
    pub id: ExpenseId,

    /// Date the expense happened
    pub date: NaiveDate,

    /// Free-text description
    #[serde(default)]
    pub item: String,

    /// Total amount paid
    pub amount: Money,

    /// Participant who paid; `None` when unattributed
    #[serde(default)]
    pub paid_by: Option<String>,

    /// Participants sharing the cost
    #[serde(default)]
    pub split_among: Vec<String>,
}

impl Expense {
    /// Create a new expense with no description and no beneficiaries
    pub fn new(date: NaiveDate, amount: Money, paid_by: Option<String>) -> Self {
        Self {
            id: ExpenseId::new(),
            date,
            item: String::new(),
            amount,
            paid_by,
            split_among: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = item.into();
        self
    }

    /// Set the beneficiaries
    pub fn with_split<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.split_among = names.into_iter().map(Into::into).collect();
        self
    }

    /// Check whether `name` paid for this expense
    pub fn is_paid_by(&self, name: &str) -> bool {
        self.paid_by.as_deref() == Some(name)
    }

    /// Check whether `name` is listed as a beneficiary
    pub fn is_split_with(&self, name: &str) -> bool {
        self.split_among.iter().any(|p| p == name)
    }

    /// Label used for itemized settlement lines
    pub fn reason(&self) -> &str {
        if self.item.trim().is_empty() {
            UNTITLED_ITEM
        } else {
            &self.item
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> SplitResult<()> {
        if self.amount.is_negative() {
            return Err(SplitError::Validation(format!(
                "Expense amount cannot be negative: {}",
                self.amount
            )));
        }
        if !self.amount.is_in_range() {
            return Err(SplitError::Validation(format!(
                "Expense amount is too large: {}",
                self.amount
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn test_new_expense() {
        let e = Expense::new(test_date(), Money::from_units(60), Some("Bob".into()))
            .with_item("Drinks")
            .with_split(["Alice", "Bob"]);

        assert!(e.is_paid_by("Bob"));
        assert!(!e.is_paid_by("Alice"));
        assert!(e.is_split_with("Alice"));
        assert!(!e.is_split_with("Charlie"));
        assert_eq!(e.reason(), "Drinks");
    }

    #[test]
    fn test_untitled_reason() {
        let e = Expense::new(test_date(), Money::zero(), None).with_item("  ");
        assert_eq!(e.reason(), UNTITLED_ITEM);
    }

    #[test]
    fn test_negative_amount_invalid() {
        let e = Expense::new(test_date(), Money::from_cents(-1), None);
        assert!(e.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_oversized_amount_invalid() {
        let e = Expense::new(test_date(), Money::from_cents(Money::MAX_CENTS + 1), None);
        assert!(e.validate().unwrap_err().is_validation());

        let e = Expense::new(test_date(), Money::from_cents(Money::MAX_CENTS), None);
        assert!(e.validate().is_ok());
    }

    #[test]
    fn test_serde_defaults() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "date": "2025-03-14",
            "amount": 1500
        }"#;
        let e: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(e.amount, Money::from_cents(1500));
        assert!(e.paid_by.is_none());
        assert!(e.split_among.is_empty());
        assert_eq!(e.item, "");
    }
}
