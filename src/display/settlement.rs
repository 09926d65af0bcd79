//! Balance and settlement display formatting
//!
//! Balances are shown to the cent. Transfer amounts, including itemized line
//! items, are rounded up to whole units so that nothing is under-collected.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::{format_signed, separator, RULE_WIDTH, TRANSFER_ARROW};
use crate::models::{Balance, SettlementStrategy};
use crate::services::SettlementReport;

#[derive(Tabled)]
struct BalanceRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Paid")]
    paid: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Net")]
    net: String,
}

/// Format per-participant balances as a table
pub fn format_balances(balances: &[Balance], symbol: &str) -> String {
    if balances.is_empty() {
        return "No participants yet.\n".to_string();
    }

    let rows = balances.iter().map(|b| BalanceRow {
        name: b.name.clone(),
        paid: b.paid.format_with_symbol(symbol),
        share: b.share.format_with_symbol(symbol),
        net: format_signed(b.net, symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));
    format!("{}\n", table)
}

/// Format a settlement report
///
/// With `details`, itemized transfers list the expenses behind them.
pub fn format_settlement(report: &SettlementReport, symbol: &str, details: bool) -> String {
    let mut output = String::new();
    output.push_str(&format!("Settlement ({})\n", report.strategy));
    output.push_str(&format!("{}\n", separator(RULE_WIDTH)));

    if report.transfers.is_empty() {
        if report.total_spent.is_zero() {
            output.push_str("Add expenses to calculate.\n");
        } else {
            output.push_str("Everyone is settled up!\n");
        }
        return output;
    }

    let from_width = report
        .transfers
        .iter()
        .map(|t| t.from.chars().count())
        .max()
        .unwrap_or(4);
    let to_width = report
        .transfers
        .iter()
        .map(|t| t.to.chars().count())
        .max()
        .unwrap_or(4);

    for transfer in &report.transfers {
        output.push_str(&format!(
            "{:<from_width$} {} {:<to_width$}  {:>10}\n",
            transfer.from,
            TRANSFER_ARROW,
            transfer.to,
            transfer.amount.format_rounded_up(symbol),
            from_width = from_width,
            to_width = to_width,
        ));

        if details {
            for item in &transfer.items {
                output.push_str(&format!(
                    "    {:<width$}  {:>10}\n",
                    item.reason,
                    item.amount.format_rounded_up(symbol),
                    width = from_width + to_width + 1,
                ));
            }
        }
    }

    output.push('\n');
    if report.strategy == SettlementStrategy::Smart {
        output.push_str("Pooled: debts are netted across the whole group.\n");
    }
    output.push_str(&format!(
        "{} transfer(s), {} total spent\n",
        report.transfers.len(),
        report.total_spent.format_with_symbol(symbol)
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ledger, Money};
    use crate::services::SettlementEngine;
    use chrono::NaiveDate;

    fn sample() -> Ledger {
        Ledger::sample(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
    }

    #[test]
    fn test_format_balances() {
        let balances = SettlementEngine::new(&sample()).balances();
        let output = format_balances(&balances, "$");

        assert!(output.contains("Name"));
        assert!(output.contains("$1800.00"));
        assert!(output.contains("+$1000.00"));
        assert!(output.contains("-$200.00"));
    }

    #[test]
    fn test_transfer_amounts_round_up() {
        let expense = crate::models::Expense::new(
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            Money::from_units(100),
            Some("A".into()),
        )
        .with_item("Pizza")
        .with_split(["A", "B", "C"]);
        let ledger = Ledger::from_names(["A", "B", "C"], vec![expense]).unwrap();
        let report = SettlementEngine::new(&ledger).report(SettlementStrategy::Itemized);

        // 100 / 3 = 33.33 each; shown as 34
        let output = format_settlement(&report, "$", true);
        assert!(output.contains("B → A"));
        assert!(output.contains("$34"));
        assert!(output.contains("Pizza"));
        assert!(!output.contains("Pooled"));
    }

    #[test]
    fn test_smart_settlement_output() {
        let report = SettlementEngine::new(&sample()).report(SettlementStrategy::Smart);
        let output = format_settlement(&report, "₹", false);

        assert!(output.contains("Settlement (Smart)"));
        assert!(output.contains("Charlie → Alice"));
        assert!(output.contains("₹800"));
        assert!(output.contains("Pooled"));
    }

    #[test]
    fn test_empty_states() {
        let report = SettlementEngine::new(&Ledger::default()).report(SettlementStrategy::Smart);
        assert!(format_settlement(&report, "$", false).contains("Add expenses to calculate."));

        let solo = Ledger::from_names(
            ["A"],
            vec![crate::models::Expense::new(
                NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                Money::from_units(10),
                Some("A".into()),
            )],
        )
        .unwrap();
        let report = SettlementEngine::new(&solo).report(SettlementStrategy::Smart);
        assert!(format_settlement(&report, "$", false).contains("Everyone is settled up!"));
    }
}
