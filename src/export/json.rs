//! JSON Export functionality
//!
//! Exports the ledger together with its computed balances, with schema
//! versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{SplitError, SplitResult};
use crate::models::{Balance, Ledger, Money};
use crate::services::compute_balances;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The ledger itself
    pub ledger: Ledger,

    /// Balances at export time, for reference
    pub balances: Vec<Balance>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub participant_count: usize,
    pub expense_count: usize,
    pub total_spent: Money,
    pub earliest_expense: Option<String>,
    pub latest_expense: Option<String>,
}

impl FullExport {
    /// Create a new full export from a ledger
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let dates = ledger.expenses().iter().map(|e| e.date);

        let metadata = ExportMetadata {
            participant_count: ledger.participants().len(),
            expense_count: ledger.expenses().len(),
            total_spent: ledger.total_spent(),
            earliest_expense: dates.clone().min().map(|d| d.to_string()),
            latest_expense: dates.max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            ledger: ledger.clone(),
            balances: compute_balances(ledger),
            metadata,
        }
    }
}

/// Export the full ledger to JSON
pub fn export_full_json<W: Write>(ledger: &Ledger, writer: &mut W, pretty: bool) -> SplitResult<()> {
    let export = FullExport::from_ledger(ledger);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| SplitError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| SplitError::Export(e.to_string()))?;
    Ok(())
}
