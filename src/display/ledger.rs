//! Ledger display formatting
//!
//! Formats participants and expenses for terminal output.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::truncate;
use crate::models::{Expense, Ledger};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Paid By")]
    paid_by: String,
    #[tabled(rename = "Split Among")]
    split_among: String,
}

/// Format the participant list, marking how many expenses each paid
pub fn format_participant_list(ledger: &Ledger) -> String {
    if ledger.participants().is_empty() {
        return "No participants yet.\n".to_string();
    }

    let mut output = String::new();
    for participant in ledger.participants() {
        let paid = ledger
            .expenses()
            .iter()
            .filter(|e| e.is_paid_by(participant.name()))
            .count();
        output.push_str(&format!("  {}  ({} paid)\n", participant, paid));
    }
    output
}

/// Format all expenses as a table
pub fn format_expense_list(ledger: &Ledger, symbol: &str) -> String {
    if ledger.expenses().is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = ledger.expenses().iter().map(|e| ExpenseRow {
        id: e.id.to_string(),
        date: e.date.to_string(),
        item: truncate(e.reason(), 30),
        amount: e.amount.format_with_symbol(symbol),
        paid_by: payer_label(ledger, e),
        split_among: split_label(ledger, e),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()));

    format!(
        "{}\n\nTotal spent: {}\n",
        table,
        ledger.total_spent().format_with_symbol(symbol)
    )
}

/// Format a single expense
pub fn format_expense_details(ledger: &Ledger, expense: &Expense, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense: {}\n", expense.reason()));
    output.push_str(&format!("  ID:          {}\n", expense.id));
    output.push_str(&format!("  Date:        {}\n", expense.date));
    output.push_str(&format!("  Amount:      {}\n", expense.amount.format_with_symbol(symbol)));
    output.push_str(&format!("  Paid By:     {}\n", payer_label(ledger, expense)));
    output.push_str(&format!("  Split Among: {}\n", split_label(ledger, expense)));
    output
}

fn payer_label(ledger: &Ledger, expense: &Expense) -> String {
    match expense.paid_by.as_deref() {
        Some(payer) if ledger.is_participant(payer) => payer.to_string(),
        Some(payer) => format!("{} (removed)", payer),
        None => "(unattributed)".to_string(),
    }
}

fn split_label(ledger: &Ledger, expense: &Expense) -> String {
    let beneficiaries = ledger.current_beneficiaries(expense);
    if beneficiaries.is_empty() {
        "(payer only)".to_string()
    } else if beneficiaries.len() == ledger.participants().len() {
        "Everyone".to_string()
    } else {
        beneficiaries.join(", ")
    }
}
