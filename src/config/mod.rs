//! Configuration module for SplitBill
//!
//! This module provides configuration management including:
//! - Path resolution for settings and the ledger snapshot
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SplitPaths;
pub use settings::Settings;
