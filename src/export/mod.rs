//! Export module for SplitBill
//!
//! Provides ledger export in multiple formats:
//! - CSV: one row per expense (spreadsheet-compatible)
//! - JSON: machine-readable full ledger with balances
//! - YAML: human-readable full ledger with balances

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
