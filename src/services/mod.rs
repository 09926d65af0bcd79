//! Service layer for SplitBill
//!
//! The balance and settlement engine. Every function here is a pure
//! computation over a [`Ledger`](crate::models::Ledger) snapshot.

pub mod balance;
pub mod itemized_settle;
pub mod settlement;
pub mod smart_settle;

pub use balance::{compute_balances, BalanceCalculator};
pub use itemized_settle::itemized_settlements;
pub use settlement::{apply_transfers, compute_settlements, SettlementEngine, SettlementReport};
pub use smart_settle::{smart_settlements, SETTLED_TOLERANCE};
