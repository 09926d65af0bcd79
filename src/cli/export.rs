//! CLI commands for data export
//!
//! Provides commands for exporting the ledger in various formats.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{SplitError, SplitResult};
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml, FullExport};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per expense)
    Csv,
    /// JSON format (full ledger with balances)
    Json,
    /// YAML format (full ledger with balances, human-readable)
    Yaml,
}

/// Export arguments
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path
    pub output: PathBuf,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> SplitResult<()> {
    let ledger = storage.load_ledger()?;

    let file = File::create(&args.output).map_err(|e| {
        SplitError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => {
            export_expenses_csv(&ledger, &mut writer)?;
            println!(
                "Exported {} expenses to: {}",
                ledger.expenses().len(),
                args.output.display()
            );
        }
        ExportFormat::Json => {
            export_full_json(&ledger, &mut writer, args.pretty)?;
            println!("Full ledger exported to: {}", args.output.display());
        }
        ExportFormat::Yaml => {
            export_full_yaml(&ledger, &mut writer)?;
            println!("Full ledger exported to: {}", args.output.display());
        }
    }

    writer
        .flush()
        .map_err(|e| SplitError::Export(e.to_string()))?;

    if !matches!(args.format, ExportFormat::Csv) {
        let metadata = FullExport::from_ledger(&ledger).metadata;
        println!(
            "  {} participants, {} expenses",
            metadata.participant_count, metadata.expense_count
        );
    }

    Ok(())
}
