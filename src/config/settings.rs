//! User settings for the expense ledger
//!
//! Manages preferences for exports, the audit trail and the initial ledger
//! capacity.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::export::ExportFormat;
use crate::models::DEFAULT_CAPACITY;

/// User settings for the expense ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Export destination, relative to the working directory
    #[serde(default = "default_export_file")]
    pub export_file: PathBuf,

    /// Format written by the export command
    #[serde(default)]
    pub export_format: ExportFormat,

    /// Entry slots reserved when a session starts
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,

    /// Whether ledger actions are appended to the audit log
    #[serde(default)]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_export_file() -> PathBuf {
    PathBuf::from("expenses.csv")
}

fn default_initial_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            export_file: default_export_file(),
            export_format: ExportFormat::default(),
            initial_capacity: default_initial_capacity(),
            audit_enabled: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                LedgerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            LedgerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            LedgerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
