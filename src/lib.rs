//! SplitBill - group expense balance and settlement engine
//!
//! This library keeps a shared ledger of expenses (who paid, how much, and
//! who shared the cost) and derives per-participant balances and the
//! transfers that settle the group.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Ledger, expenses, money, balances and transfers
//! - `services`: Balance computation and the two settlement strategies
//! - `share`: Compact share-link encoding of a whole ledger
//! - `export`: CSV, JSON and YAML exports
//! - `config`: Configuration and path management
//! - `storage`: JSON snapshot storage
//! - `cli` / `display`: Command handlers and terminal formatting
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use splitbill::models::{Ledger, Money, SettlementStrategy};
//! use splitbill::services::SettlementEngine;
//!
//! let ledger = Ledger::sample(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
//! let transfers = SettlementEngine::new(&ledger).settle(SettlementStrategy::Smart);
//!
//! assert_eq!(transfers.len(), 2);
//! assert_eq!(transfers[0].amount, Money::from_units(800));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod share;
pub mod storage;

pub use error::SplitError;
