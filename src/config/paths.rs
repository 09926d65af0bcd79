//! Path management for SplitBill
//!
//! ## Path Resolution Order
//!
//! 1. `SPLITBILL_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory reported by `directories`
//!    (`~/.config/splitbill` on Linux, `%APPDATA%\splitbill\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::SplitError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "SPLITBILL_DATA_DIR";

/// Manages all paths used by SplitBill
#[derive(Debug, Clone)]
pub struct SplitPaths {
    base_dir: PathBuf,
}

impl SplitPaths {
    /// Create a new SplitPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is not set.
    pub fn new() -> Result<Self, SplitError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create SplitPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the ledger snapshot
    pub fn ledger_file(&self) -> PathBuf {
        self.data_dir().join("ledger.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), SplitError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SplitError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SplitError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if a ledger has been initialized
    pub fn is_initialized(&self) -> bool {
        self.ledger_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, SplitError> {
    ProjectDirs::from("", "", "splitbill")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            SplitError::Config(format!(
                "Could not determine a configuration directory; set {}",
                DATA_DIR_ENV
            ))
        })
}
