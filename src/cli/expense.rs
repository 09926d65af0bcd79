//! Expense CLI commands
//!
//! Implements CLI commands for recording and editing expenses.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::{SplitError, SplitResult};
use crate::models::{ExpenseUpdate, Money, NewExpense};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g., "18.50" or "1800")
        amount: String,
        /// What the money was spent on
        #[arg(short, long, default_value = "")]
        item: String,
        /// Who paid (defaults to the first participant)
        #[arg(short, long)]
        paid_by: Option<String>,
        /// Who shares the cost, comma-separated (defaults to everyone)
        #[arg(short, long, value_delimiter = ',')]
        split: Option<Vec<String>>,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List all expenses
    List,
    /// Show expense details
    Show {
        /// Expense ID
        id: String,
    },
    /// Edit an expense
    Edit {
        /// Expense ID
        id: String,
        /// New description
        #[arg(short, long)]
        item: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New payer
        #[arg(short, long)]
        paid_by: Option<String>,
    },
    /// Add or remove a participant from an expense split
    Toggle {
        /// Expense ID
        id: String,
        /// Participant name
        name: String,
    },
    /// Delete an expense
    Remove {
        /// Expense ID
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SplitResult<()> {
    let mut ledger = storage.load_ledger()?;
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            item,
            paid_by,
            split,
            date,
        } => {
            let new = NewExpense {
                item,
                amount: parse_amount(&amount)?,
                date: date.as_deref().map(parse_date).transpose()?,
                paid_by,
                split_among: split,
            };
            let expense = ledger.add_expense(new)?.clone();
            storage.save_ledger(&ledger)?;

            println!("Added expense: {}", expense.reason());
            println!("  Amount: {}", expense.amount.format_with_symbol(symbol));
            if let Some(payer) = &expense.paid_by {
                println!("  Paid By: {}", payer);
            }
            println!("  Split Among: {}", expense.split_among.join(", "));
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::List => {
            print!("{}", format_expense_list(&ledger, symbol));
        }

        ExpenseCommands::Show { id } => {
            let expense = ledger.find_expense(&id)?;
            print!("{}", format_expense_details(&ledger, expense, symbol));
        }

        ExpenseCommands::Edit {
            id,
            item,
            amount,
            date,
            paid_by,
        } => {
            let update = ExpenseUpdate {
                item,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                date: date.as_deref().map(parse_date).transpose()?,
                paid_by,
            };

            if update.is_empty() {
                println!("No changes specified. Use --item, --amount, --date or --paid-by.");
                return Ok(());
            }

            let updated = ledger.update_expense(&id, update)?.clone();
            storage.save_ledger(&ledger)?;
            println!("Updated expense: {} ({})", updated.reason(), updated.id);
        }

        ExpenseCommands::Toggle { id, name } => {
            let included = ledger.toggle_split(&id, &name)?;
            storage.save_ledger(&ledger)?;
            if included {
                println!("{} now shares expense {}", name.trim(), id);
            } else {
                println!("{} no longer shares expense {}", name.trim(), id);
            }
        }

        ExpenseCommands::Remove { id } => {
            let removed = ledger.remove_expense(&id)?;
            storage.save_ledger(&ledger)?;
            println!(
                "Removed expense: {} ({})",
                removed.reason(),
                removed.amount.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}

fn parse_amount(input: &str) -> SplitResult<Money> {
    Money::parse(input).map_err(|e| {
        SplitError::Validation(format!(
            "Invalid amount: '{}'. Use format like '18.50' or '1800'. Error: {}",
            input, e
        ))
    })
}

fn parse_date(input: &str) -> SplitResult<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        SplitError::Validation(format!("Invalid date: '{}'. Use YYYY-MM-DD.", input))
    })
}
