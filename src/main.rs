use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use splitbill::cli::{
    handle_balances_command, handle_expense_command, handle_export_command,
    handle_participant_command, handle_settle_command, handle_share_command,
};
use splitbill::config::{paths::SplitPaths, settings::Settings};
use splitbill::models::{Ledger, PayerRemovalPolicy, SettlementStrategy};
use splitbill::storage::Storage;

#[derive(Parser)]
#[command(
    name = "splitbill",
    author = "Kaylee Beyene",
    version,
    about = "Split group expenses and settle up with the fewest transfers",
    long_about = "SplitBill keeps a shared ledger of who paid for what and who \
                  shared it, then works out who owes whom. Settle with pooled \
                  minimal transfers, or itemized per-payer debts."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new ledger
    Init {
        /// Seed the ledger with a small demo group
        #[arg(long)]
        sample: bool,
        /// Overwrite an existing ledger
        #[arg(long)]
        force: bool,
    },

    /// Participant management commands
    #[command(subcommand, alias = "p")]
    Participant(splitbill::cli::ParticipantCommands),

    /// Expense management commands
    #[command(subcommand, alias = "e")]
    Expense(splitbill::cli::ExpenseCommands),

    /// Show what everyone paid, owes, and their net balance
    Balances,

    /// Show the transfers that settle the group
    Settle {
        /// Settlement strategy (defaults to the configured one)
        #[arg(short, long, value_enum)]
        strategy: Option<SettlementStrategy>,
        /// List the expenses behind each itemized transfer
        #[arg(short, long)]
        details: bool,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the ledger to a file
    Export(splitbill::cli::ExportArgs),

    /// Share the ledger as a link, or load one
    #[command(subcommand)]
    Share(splitbill::cli::ShareCommands),

    /// Show or change configuration
    Config {
        /// Currency symbol used in output
        #[arg(long)]
        currency: Option<String>,
        /// Default settlement strategy
        #[arg(long, value_enum)]
        strategy: Option<SettlementStrategy>,
        /// What happens to expenses paid by a removed participant
        #[arg(long, value_enum)]
        payer_removal: Option<PayerRemovalPolicy>,
        /// Base URL for share links
        #[arg(long)]
        share_url: Option<String>,
        /// Log level when RUST_LOG is unset (error, warn, info, debug, trace)
        #[arg(long)]
        log_level: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SplitPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("splitbill={}", settings.log_level))),
        )
        .with_writer(std::io::stderr)
        .init();

    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Init { sample, force }) => {
            if storage.is_initialized() && !force {
                println!(
                    "A ledger already exists at: {}",
                    paths.ledger_file().display()
                );
                println!("Use --force to start over.");
                return Ok(());
            }

            let ledger = if sample {
                Ledger::sample(Local::now().date_naive())
            } else {
                Ledger::default()
            };
            storage.save_ledger(&ledger)?;
            settings.save(&paths)?;

            println!("Initialized SplitBill at: {}", paths.base_dir().display());
            if sample {
                println!();
                println!("A demo group has been created:");
                println!("  - Alice, Bob, Charlie");
                println!("  - Dinner (paid by Alice) and Drinks (paid by Bob)");
                println!();
                println!("Run 'splitbill settle' to see who owes whom.");
            } else {
                println!("Run 'splitbill participant add <name>' to build your group.");
            }
        }
        Some(Commands::Participant(cmd)) => {
            handle_participant_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Balances) => {
            handle_balances_command(&storage, &settings)?;
        }
        Some(Commands::Settle {
            strategy,
            details,
            json,
        }) => {
            handle_settle_command(&storage, &settings, strategy, details, json)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, args)?;
        }
        Some(Commands::Share(cmd)) => {
            handle_share_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Config {
            currency,
            strategy,
            payer_removal,
            share_url,
            log_level,
        }) => {
            let mut changed = false;
            if let Some(currency) = currency {
                settings.currency_symbol = currency;
                changed = true;
            }
            if let Some(strategy) = strategy {
                settings.default_strategy = strategy;
                changed = true;
            }
            if let Some(policy) = payer_removal {
                settings.payer_removal = policy;
                changed = true;
            }
            if let Some(url) = share_url {
                settings.share_base_url = url;
                changed = true;
            }
            if let Some(level) = log_level {
                settings.log_level = level;
                changed = true;
            }
            if changed {
                settings.save(&paths)?;
                println!("Settings saved.");
                println!();
            }

            println!("SplitBill Configuration");
            println!("=======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Ledger file:      {}", paths.ledger_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Default strategy: {}", settings.default_strategy);
            println!("  Payer removal:    {:?}", settings.payer_removal);
            println!("  Share base URL:   {}", settings.share_base_url);
            println!("  Log level:        {}", settings.log_level);
        }
        None => {
            println!("SplitBill - Split group expenses and settle up");
            println!();
            println!("Run 'splitbill --help' for usage information.");
            println!("Run 'splitbill init --sample' to try a demo group.");
        }
    }

    Ok(())
}
