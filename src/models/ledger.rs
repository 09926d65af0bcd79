//! Ledger model
//!
//! The ledger is the full set of participants and expenses at a point in
//! time. It is the only input of the balance and settlement engine; the
//! mutation methods here are used by the host to edit the snapshot between
//! computations.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::expense::Expense;
use super::money::Money;
use super::participant::Participant;
use crate::error::{SplitError, SplitResult};

/// What happens to expenses paid by a participant who is removed
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum PayerRemovalPolicy {
    /// Hand the expense to the first remaining participant
    #[default]
    ReassignFirst,
    /// Leave the expense without a payer until it is reassigned
    Unattributed,
}

/// Input for [`Ledger::add_expense`]
///
/// Missing fields take the defaults of a freshly added row: today's date,
/// the first participant as payer, and everyone as beneficiary.
#[derive(Debug, Clone, Default)]
pub struct NewExpense {
    pub item: String,
    pub amount: Money,
    pub date: Option<NaiveDate>,
    pub paid_by: Option<String>,
    pub split_among: Option<Vec<String>>,
}

/// Field changes for [`Ledger::update_expense`]
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub item: Option<String>,
    pub amount: Option<Money>,
    pub date: Option<NaiveDate>,
    pub paid_by: Option<String>,
}

impl ExpenseUpdate {
    /// Check if the update changes nothing
    pub fn is_empty(&self) -> bool {
        self.item.is_none() && self.amount.is_none() && self.date.is_none() && self.paid_by.is_none()
    }
}

/// Side effects of removing a participant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalSummary {
    /// New payer for the removed participant's expenses, if any
    pub reassigned_to: Option<String>,
    /// Number of expenses whose payer changed
    pub payer_updates: usize,
    /// Number of expenses the participant was stripped from
    pub splits_stripped: usize,
}

/// Participants and expenses of one group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LedgerData")]
pub struct Ledger {
    participants: Vec<Participant>,
    expenses: Vec<Expense>,
}

#[derive(Deserialize)]
struct LedgerData {
    #[serde(default)]
    participants: Vec<Participant>,
    #[serde(default)]
    expenses: Vec<Expense>,
}

impl TryFrom<LedgerData> for Ledger {
    type Error = SplitError;

    fn try_from(data: LedgerData) -> Result<Self, Self::Error> {
        Self::new(data.participants, data.expenses)
    }
}

impl Ledger {
    /// Build a ledger, enforcing unique non-empty participant names and
    /// unique expense IDs
    pub fn new(participants: Vec<Participant>, expenses: Vec<Expense>) -> SplitResult<Self> {
        let mut seen = HashSet::new();
        for participant in &participants {
            let name = participant.name();
            if name.trim().is_empty() || name.trim() != name {
                return Err(SplitError::Invariant(format!(
                    "invalid participant name: {:?}",
                    name
                )));
            }
            if !seen.insert(name) {
                return Err(SplitError::Invariant(format!(
                    "participant listed twice: {}",
                    name
                )));
            }
        }

        let mut ids = HashSet::new();
        for expense in &expenses {
            expense
                .validate()
                .map_err(|e| SplitError::Invariant(format!("expense {}: {}", expense.id, e)))?;
            if !ids.insert(expense.id) {
                return Err(SplitError::Invariant(format!(
                    "expense ID listed twice: {}",
                    expense.id
                )));
            }
        }

        Ok(Self {
            participants,
            expenses,
        })
    }

    /// Build a ledger from plain names
    pub fn from_names<I, S>(names: I, expenses: Vec<Expense>) -> SplitResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let participants = names
            .into_iter()
            .map(Participant::new)
            .collect::<SplitResult<Vec<_>>>()?;
        Self::new(participants, expenses)
    }

    /// The demo ledger: three friends, a dinner and a round of drinks
    pub fn sample(date: NaiveDate) -> Self {
        let everyone = ["Alice", "Bob", "Charlie"];
        let expenses = vec![
            Expense::new(date, Money::from_units(1800), Some("Alice".into()))
                .with_item("Dinner")
                .with_split(everyone),
            Expense::new(date, Money::from_units(600), Some("Bob".into()))
                .with_item("Drinks")
                .with_split(everyone),
        ];
        Self {
            participants: everyone
                .iter()
                .filter_map(|n| Participant::new(n).ok())
                .collect(),
            expenses,
        }
    }

    /// Participants in display order
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Check if `name` is a current participant
    pub fn is_participant(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p == name)
    }

    /// Beneficiaries of `expense` that are still participants
    ///
    /// Returned in participant order, each name once.
    pub fn current_beneficiaries<'a>(&'a self, expense: &Expense) -> Vec<&'a str> {
        self.participants
            .iter()
            .map(Participant::name)
            .filter(|name| expense.is_split_with(name))
            .collect()
    }

    /// The expense's payer, if they are still a participant
    pub fn current_payer<'a>(&self, expense: &'a Expense) -> Option<&'a str> {
        expense
            .paid_by
            .as_deref()
            .filter(|payer| self.is_participant(payer))
    }

    /// Sum of every expense amount
    pub fn total_spent(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Add a participant
    pub fn add_participant(&mut self, name: &str) -> SplitResult<&Participant> {
        let participant = Participant::new(name)?;
        if self.is_participant(participant.name()) {
            return Err(SplitError::duplicate_participant(participant.name()));
        }
        tracing::info!(participant = %participant, "added participant");
        self.participants.push(participant);
        let last = self.participants.len() - 1;
        Ok(&self.participants[last])
    }

    /// Remove a participant and detach them from every expense
    pub fn remove_participant(
        &mut self,
        name: &str,
        policy: PayerRemovalPolicy,
    ) -> SplitResult<RemovalSummary> {
        let name = name.trim();
        let index = self
            .participants
            .iter()
            .position(|p| p == name)
            .ok_or_else(|| SplitError::participant_not_found(name))?;
        self.participants.remove(index);

        let reassigned_to = match policy {
            PayerRemovalPolicy::ReassignFirst => {
                self.participants.first().map(|p| p.name().to_string())
            }
            PayerRemovalPolicy::Unattributed => None,
        };

        let mut summary = RemovalSummary {
            reassigned_to: reassigned_to.clone(),
            ..RemovalSummary::default()
        };

        for expense in &mut self.expenses {
            let before = expense.split_among.len();
            expense.split_among.retain(|p| p != name);
            if expense.split_among.len() != before {
                summary.splits_stripped += 1;
            }
            if expense.is_paid_by(name) {
                expense.paid_by = reassigned_to.clone();
                summary.payer_updates += 1;
            }
        }

        tracing::info!(
            participant = name,
            ?policy,
            payer_updates = summary.payer_updates,
            splits_stripped = summary.splits_stripped,
            "removed participant"
        );
        Ok(summary)
    }

    /// Add an expense
    pub fn add_expense(&mut self, new: NewExpense) -> SplitResult<&Expense> {
        let paid_by = match new.paid_by {
            Some(name) => Some(self.require_participant(&name)?),
            None => self.participants.first().map(|p| p.name().to_string()),
        };

        let split_among = match new.split_among {
            Some(names) => {
                let mut split: Vec<String> = Vec::with_capacity(names.len());
                for name in names {
                    let name = self.require_participant(&name)?;
                    if !split.contains(&name) {
                        split.push(name);
                    }
                }
                split
            }
            None => self
                .participants
                .iter()
                .map(|p| p.name().to_string())
                .collect(),
        };

        let date = new.date.unwrap_or_else(|| Local::now().date_naive());
        let expense = Expense::new(date, new.amount, paid_by)
            .with_item(new.item.trim())
            .with_split(split_among);
        expense.validate()?;

        tracing::info!(expense = %expense.id, amount = %expense.amount, "added expense");
        self.expenses.push(expense);
        let last = self.expenses.len() - 1;
        Ok(&self.expenses[last])
    }

    /// Find an expense by full ID or short display form
    pub fn find_expense(&self, query: &str) -> SplitResult<&Expense> {
        let index = self.expense_index(query)?;
        Ok(&self.expenses[index])
    }

    /// Apply field changes to an expense
    pub fn update_expense(&mut self, query: &str, update: ExpenseUpdate) -> SplitResult<&Expense> {
        let index = self.expense_index(query)?;
        let paid_by = match update.paid_by {
            Some(name) => Some(self.require_participant(&name)?),
            None => None,
        };

        let mut expense = self.expenses[index].clone();
        if let Some(item) = update.item {
            expense.item = item.trim().to_string();
        }
        if let Some(amount) = update.amount {
            expense.amount = amount;
        }
        if let Some(date) = update.date {
            expense.date = date;
        }
        if paid_by.is_some() {
            expense.paid_by = paid_by;
        }
        expense.validate()?;

        self.expenses[index] = expense;
        Ok(&self.expenses[index])
    }

    /// Add `name` to an expense's beneficiaries, or remove them if present
    ///
    /// Returns whether the participant is included after the toggle.
    pub fn toggle_split(&mut self, query: &str, name: &str) -> SplitResult<bool> {
        let index = self.expense_index(query)?;
        let name = self.require_participant(name)?;
        let expense = &mut self.expenses[index];

        if expense.is_split_with(&name) {
            expense.split_among.retain(|p| *p != name);
            Ok(false)
        } else {
            expense.split_among.push(name);
            Ok(true)
        }
    }

    /// Remove an expense
    pub fn remove_expense(&mut self, query: &str) -> SplitResult<Expense> {
        let index = self.expense_index(query)?;
        let removed = self.expenses.remove(index);
        tracing::info!(expense = %removed.id, "removed expense");
        Ok(removed)
    }

    fn expense_index(&self, query: &str) -> SplitResult<usize> {
        let matches: Vec<usize> = self
            .expenses
            .iter()
            .enumerate()
            .filter(|(_, e)| e.id.matches(query))
            .map(|(i, _)| i)
            .collect();

        match matches.as_slice() {
            [] => Err(SplitError::expense_not_found(query)),
            [index] => Ok(*index),
            _ => Err(SplitError::Validation(format!(
                "Expense reference '{}' is ambiguous ({} matches)",
                query,
                matches.len()
            ))),
        }
    }

    fn require_participant(&self, name: &str) -> SplitResult<String> {
        let name = name.trim();
        if self.is_participant(name) {
            Ok(name.to_string())
        } else {
            Err(SplitError::participant_not_found(name))
        }
    }
}
