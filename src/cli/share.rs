//! Share link CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::SplitResult;
use crate::share::{decode_or_default, share_url};
use crate::storage::Storage;

/// Share subcommands
#[derive(Subcommand)]
pub enum ShareCommands {
    /// Print a link that carries the whole ledger
    Link {
        /// Base URL (defaults to the configured share URL)
        #[arg(short, long)]
        base_url: Option<String>,
    },
    /// Replace the current ledger with one from a share link
    Load {
        /// A share link or its bare payload
        input: String,
    },
}

/// Handle a share command
pub fn handle_share_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ShareCommands,
) -> SplitResult<()> {
    match cmd {
        ShareCommands::Link { base_url } => {
            let ledger = storage.load_ledger()?;
            let base_url = base_url.as_deref().unwrap_or(&settings.share_base_url);
            println!("{}", share_url(base_url, &ledger)?);
        }

        ShareCommands::Load { input } => {
            let outcome = decode_or_default(input.trim());

            // A rejected link leaves the saved ledger untouched
            if let Some(warning) = outcome.warning {
                println!("Could not load shared ledger: {}", warning);
                println!("Your current ledger was not changed.");
                return Ok(());
            }

            storage.save_ledger(&outcome.ledger)?;
            println!(
                "Loaded shared ledger: {} participants, {} expenses",
                outcome.ledger.participants().len(),
                outcome.ledger.expenses().len()
            );
        }
    }

    Ok(())
}
