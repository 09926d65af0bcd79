//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger and settlement engine.

pub mod expense;
pub mod export;
pub mod participant;
pub mod settle;
pub mod share;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use participant::{handle_participant_command, ParticipantCommands};
pub use settle::{handle_balances_command, handle_settle_command};
pub use share::{handle_share_command, ShareCommands};
