//! CSV Export functionality
//!
//! Exports the ledger's expenses as one row each, spreadsheet-compatible.

use std::io::Write;

use crate::error::{SplitError, SplitResult};
use crate::models::{Expense, Ledger};

/// Header row of the expense export
pub const EXPENSE_HEADERS: [&str; 5] = ["Date", "Item Description", "Amount", "Paid By", "Split Among"];

/// Separator between names in the "Split Among" column
pub const SPLIT_SEPARATOR: &str = "; ";

/// Export all expenses to CSV
pub fn export_expenses_csv<W: Write>(ledger: &Ledger, writer: &mut W) -> SplitResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(EXPENSE_HEADERS)
        .map_err(|e| SplitError::Export(e.to_string()))?;

    for expense in ledger.expenses() {
        csv_writer
            .write_record(expense_row(expense))
            .map_err(|e| SplitError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| SplitError::Export(e.to_string()))?;

    Ok(())
}

fn expense_row(expense: &Expense) -> [String; 5] {
    [
        expense.date.format("%Y-%m-%d").to_string(),
        sanitize_item(&expense.item),
        expense.amount.to_decimal_string(),
        expense.paid_by.clone().unwrap_or_default(),
        expense.split_among.join(SPLIT_SEPARATOR),
    ]
}

/// Replace field delimiters and line breaks in a description with spaces
fn sanitize_item(item: &str) -> String {
    item.replace([',', '\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn export(ledger: &Ledger) -> String {
        let mut output = Vec::new();
        export_expenses_csv(ledger, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_export_expenses_csv() {
        let csv_string = export(&Ledger::sample(date()));
        let lines: Vec<&str> = csv_string.lines().collect();

        assert_eq!(lines[0], "Date,Item Description,Amount,Paid By,Split Among");
        assert_eq!(lines[1], "2025-01-15,Dinner,1800.00,Alice,Alice; Bob; Charlie");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_commas_in_item_are_removed() {
        let expense = Expense::new(date(), Money::from_cents(995), Some("A".into()))
            .with_item("Bread, milk, eggs")
            .with_split(["A"]);
        let ledger = Ledger::from_names(["A"], vec![expense]).unwrap();

        let csv_string = export(&ledger);
        assert!(csv_string.contains("2025-01-15,Bread  milk  eggs,9.95,A,A"));
    }

    #[test]
    fn test_unattributed_payer_is_blank() {
        let expense = Expense::new(date(), Money::from_units(3), None).with_item("Gum");
        let ledger = Ledger::from_names(["A"], vec![expense]).unwrap();
        assert!(export(&ledger).contains("2025-01-15,Gum,3.00,,"));
    }
}
