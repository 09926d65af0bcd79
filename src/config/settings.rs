//! User settings for SplitBill
//!
//! Manages preferences: currency symbol, default settlement strategy, the
//! payer policy applied when a participant is removed, and logging.

use serde::{Deserialize, Serialize};

use super::paths::SplitPaths;
use crate::error::SplitError;
use crate::models::{PayerRemovalPolicy, SettlementStrategy};

/// User settings for SplitBill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Strategy used by `settle` when none is given
    #[serde(default)]
    pub default_strategy: SettlementStrategy,

    /// What happens to a removed participant's expenses
    #[serde(default)]
    pub payer_removal: PayerRemovalPolicy,

    /// Page that share links point at
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,

    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_share_base_url() -> String {
    "https://splitbill.app/".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_strategy: SettlementStrategy::default(),
            payer_removal: PayerRemovalPolicy::default(),
            share_base_url: default_share_base_url(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SplitPaths) -> Result<Self, SplitError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SplitError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SplitError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SplitPaths) -> Result<(), SplitError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SplitError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SplitError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
