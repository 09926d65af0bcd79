//! Balance and settlement CLI commands

use crate::config::settings::Settings;
use crate::display::{format_balances, format_settlement};
use crate::error::SplitResult;
use crate::models::SettlementStrategy;
use crate::services::SettlementEngine;
use crate::storage::Storage;

/// Print per-participant balances
pub fn handle_balances_command(storage: &Storage, settings: &Settings) -> SplitResult<()> {
    let ledger = storage.load_ledger()?;
    let balances = SettlementEngine::new(&ledger).balances();

    print!("{}", format_balances(&balances, &settings.currency_symbol));
    println!();
    println!(
        "Total spent: {}",
        ledger.total_spent().format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}

/// Print the transfers that settle the group
///
/// Falls back to the configured strategy when none is given.
pub fn handle_settle_command(
    storage: &Storage,
    settings: &Settings,
    strategy: Option<SettlementStrategy>,
    details: bool,
    json: bool,
) -> SplitResult<()> {
    let ledger = storage.load_ledger()?;
    let strategy = strategy.unwrap_or(settings.default_strategy);
    let report = SettlementEngine::new(&ledger).report(strategy);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!(
            "{}",
            format_settlement(&report, &settings.currency_symbol, details)
        );
    }
    Ok(())
}
