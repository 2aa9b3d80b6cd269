//! User settings for the checkbook
//!
//! Persisted preferences: which account file to open by default and how
//! verbose the log should be.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::paths::CheckbookPaths;
use crate::error::CheckbookError;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Account file opened when `--file` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_account: Option<PathBuf>,

    /// `tracing` filter directive used when `CHECKBOOK_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_filter() -> String {
    "checkbook=info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_account: None,
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &CheckbookPaths) -> Result<Self, CheckbookError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                CheckbookError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                CheckbookError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CheckbookPaths) -> Result<(), CheckbookError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            CheckbookError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| CheckbookError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Pick the account file: explicit path, then settings, then the default
    pub fn resolve_account_file(&self, explicit: Option<&Path>, paths: &CheckbookPaths) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.default_account.clone())
            .unwrap_or_else(|| paths.default_account_file())
    }
}
