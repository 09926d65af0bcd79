//! Balance and settlement models
//!
//! Derived values produced by the engine; never persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A participant's aggregate position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Participant name
    pub name: String,
    /// Sum of amounts this participant paid
    pub paid: Money,
    /// Sum of this participant's per-head costs
    pub share: Money,
    /// `paid - share`; positive means owed money, negative means owes money
    pub net: Money,
}

impl Balance {
    /// Create a balance, deriving `net`
    pub fn new(name: impl Into<String>, paid: Money, share: Money) -> Self {
        Self {
            name: name.into(),
            paid,
            share,
            net: paid - share,
        }
    }
}

/// One contributing line of an itemized transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferItem {
    /// Expense description
    pub reason: String,
    /// This debtor's share of the expense
    pub amount: Money,
}

/// A directed payment instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Debtor
    pub from: String,
    /// Creditor
    pub to: String,
    /// Amount to pay, always positive
    pub amount: Money,
    /// Contributing line items (itemized strategy only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<TransferItem>,
}

impl Transfer {
    /// Create a transfer without line items
    pub fn new(from: impl Into<String>, to: impl Into<String>, amount: Money) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount,
            items: Vec::new(),
        }
    }
}

/// How debts are turned into transfers
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SettlementStrategy {
    /// Pool all debts and settle with the fewest transfers
    #[default]
    Smart,
    /// Keep who-owes-whom per payer, with the expenses behind each debt
    Itemized,
}

impl fmt::Display for SettlementStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Smart => write!(f, "Smart"),
            Self::Itemized => write!(f, "Itemized"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_net() {
        let b = Balance::new("Bob", Money::from_units(600), Money::from_units(800));
        assert_eq!(b.net, Money::from_units(-200));
    }

    #[test]
    fn test_strategy_serde() {
        let json = serde_json::to_string(&SettlementStrategy::Itemized).unwrap();
        assert_eq!(json, "\"itemized\"");
        let parsed: SettlementStrategy = serde_json::from_str("\"smart\"").unwrap();
        assert_eq!(parsed, SettlementStrategy::Smart);
    }

    #[test]
    fn test_transfer_without_items_omits_field() {
        let t = Transfer::new("Charlie", "Alice", Money::from_units(800));
        let json = serde_json::to_string(&t).unwrap();
        assert!(!json.contains("items"));
    }
}
