//! YAML Export functionality
//!
//! Exports the full ledger to YAML for a human-readable copy.

use std::io::Write;

use crate::error::{SplitError, SplitResult};
use crate::export::json::FullExport;
use crate::models::Ledger;

/// Export the full ledger to YAML format
pub fn export_full_yaml<W: Write>(ledger: &Ledger, writer: &mut W) -> SplitResult<()> {
    let export = FullExport::from_ledger(ledger);

    writeln!(writer, "# SplitBill Ledger Export")
        .map_err(|e| SplitError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| SplitError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| SplitError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| SplitError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| SplitError::Export(e.to_string()))?;

    Ok(())
}
