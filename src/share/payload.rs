//! Compact wire form of a ledger
//!
//! The payload keeps the short keys used by existing share links: `p` for
//! participants and `e` for expenses, with camelCase expense fields and
//! amounts as plain numbers in major units. Deserialization is lenient:
//! malformed amounts become zero, bad dates become today, foreign IDs are
//! replaced with fresh ones.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::SplitResult;
use crate::models::{Expense, ExpenseId, Ledger, Money};

/// Ledger as carried inside a share link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharePayload {
    /// Participant names
    pub p: Vec<String>,
    /// Expenses
    pub e: Vec<SharedExpense>,
}

/// Expense as carried inside a share link
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedExpense {
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub item: String,
    #[serde(default, with = "major_units")]
    pub amount: Money,
    #[serde(default)]
    pub paid_by: String,
    #[serde(default)]
    pub split_among: Vec<String>,
}

impl From<&Expense> for SharedExpense {
    fn from(expense: &Expense) -> Self {
        Self {
            id: serde_json::Value::String(expense.id.as_uuid().to_string()),
            date: expense.date.format("%Y-%m-%d").to_string(),
            item: expense.item.clone(),
            amount: expense.amount,
            paid_by: expense.paid_by.clone().unwrap_or_default(),
            split_among: expense.split_among.clone(),
        }
    }
}

impl SharedExpense {
    fn into_expense(self, today: NaiveDate) -> Expense {
        let id = self
            .id
            .as_str()
            .and_then(|s| ExpenseId::parse(s).ok())
            .unwrap_or_default();

        let date = match NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                if !self.date.is_empty() {
                    tracing::warn!(date = %self.date, "unreadable expense date; using today");
                }
                today
            }
        };

        let paid_by = Some(self.paid_by.trim().to_string()).filter(|p| !p.is_empty());

        let amount = if self.amount.is_negative() {
            tracing::warn!(amount = %self.amount, "negative expense amount; treating as 0");
            Money::zero()
        } else {
            self.amount
        };

        let mut expense = Expense::new(date, amount, paid_by)
            .with_item(self.item)
            .with_split(self.split_among);
        expense.id = id;
        expense
    }
}

impl From<&Ledger> for SharePayload {
    fn from(ledger: &Ledger) -> Self {
        Self {
            p: ledger
                .participants()
                .iter()
                .map(|p| p.name().to_string())
                .collect(),
            e: ledger.expenses().iter().map(SharedExpense::from).collect(),
        }
    }
}

impl SharePayload {
    /// Rebuild a ledger, enforcing its construction rules
    pub fn into_ledger(self) -> SplitResult<Ledger> {
        let today = Local::now().date_naive();
        let expenses = self
            .e
            .into_iter()
            .map(|e| e.into_expense(today))
            .collect();
        Ledger::from_names(self.p, expenses)
    }
}

/// Amounts on the wire: numbers in major units, or numeric strings
mod major_units {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::models::Money;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
        Other(serde_json::Value),
    }

    pub fn serialize<S: Serializer>(amount: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        if amount.cents_part() == 0 {
            serializer.serialize_i64(amount.units())
        } else {
            serializer.serialize_f64(amount.to_major())
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        Ok(match RawAmount::deserialize(deserializer)? {
            RawAmount::Number(value) => Money::from_major(value),
            RawAmount::Text(text) => Money::parse_lenient(&text),
            RawAmount::Other(value) => {
                tracing::warn!(%value, "non-numeric amount; treating as 0");
                Money::zero()
            }
        })
    }
}
