//! Storage layer for SplitBill
//!
//! Keeps exactly one ledger snapshot as JSON, written atomically.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::SplitPaths;
use crate::error::SplitError;
use crate::models::Ledger;

/// Loads and saves the ledger snapshot
pub struct Storage {
    paths: SplitPaths,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SplitPaths) -> Result<Self, SplitError> {
        paths.ensure_directories()?;
        Ok(Self { paths })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SplitPaths {
        &self.paths
    }

    /// Load the ledger, or an empty one if none has been saved
    pub fn load_ledger(&self) -> Result<Ledger, SplitError> {
        read_json(self.paths.ledger_file())
    }

    /// Replace the saved ledger
    pub fn save_ledger(&self, ledger: &Ledger) -> Result<(), SplitError> {
        write_json_atomic(self.paths.ledger_file(), ledger)?;
        tracing::debug!(path = %self.paths.ledger_file().display(), "ledger saved");
        Ok(())
    }

    /// Check if a ledger has been saved
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}
