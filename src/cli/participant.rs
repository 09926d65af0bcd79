//! Participant CLI commands
//!
//! Implements CLI commands for managing the group.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_participant_list;
use crate::error::SplitResult;
use crate::models::PayerRemovalPolicy;
use crate::storage::Storage;

/// Participant subcommands
#[derive(Subcommand)]
pub enum ParticipantCommands {
    /// Add a participant
    Add {
        /// Participant name
        name: String,
    },
    /// Remove a participant from the group and every expense split
    Remove {
        /// Participant name
        name: String,
        /// What happens to expenses they paid (defaults to the configured policy)
        #[arg(short, long, value_enum)]
        policy: Option<PayerRemovalPolicy>,
    },
    /// List participants
    List,
}

/// Handle a participant command
pub fn handle_participant_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ParticipantCommands,
) -> SplitResult<()> {
    let mut ledger = storage.load_ledger()?;

    match cmd {
        ParticipantCommands::Add { name } => {
            let added = ledger.add_participant(&name)?.to_string();
            storage.save_ledger(&ledger)?;
            println!("Added participant: {}", added);
        }

        ParticipantCommands::Remove { name, policy } => {
            let policy = policy.unwrap_or(settings.payer_removal);
            let summary = ledger.remove_participant(&name, policy)?;
            storage.save_ledger(&ledger)?;

            println!("Removed participant: {}", name.trim());
            if summary.splits_stripped > 0 {
                println!("  Removed from {} expense split(s)", summary.splits_stripped);
            }
            if summary.payer_updates > 0 {
                match &summary.reassigned_to {
                    Some(new_payer) => println!(
                        "  {} expense(s) they paid now credit {}",
                        summary.payer_updates, new_payer
                    ),
                    None => println!(
                        "  {} expense(s) they paid are now unattributed",
                        summary.payer_updates
                    ),
                }
            }
        }

        ParticipantCommands::List => {
            print!("{}", format_participant_list(&ledger));
        }
    }

    Ok(())
}
