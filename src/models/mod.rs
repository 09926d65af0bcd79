//! Core data models for SplitBill
//!
//! This module contains the data structures of the group ledger
//! (participants, expenses) and the values derived from it (balances,
//! transfers).

pub mod expense;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod participant;
pub mod settlement;

pub use expense::{Expense, UNTITLED_ITEM};
pub use ids::ExpenseId;
pub use ledger::{ExpenseUpdate, Ledger, NewExpense, PayerRemovalPolicy, RemovalSummary};
pub use money::{Money, MoneyParseError};
pub use participant::Participant;
pub use settlement::{Balance, SettlementStrategy, Transfer, TransferItem};
