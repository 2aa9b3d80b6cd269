//! Log setup
//!
//! Diagnostics go to a file under the base directory so they never draw over
//! the interactive screen.

use std::fs::OpenOptions;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{CheckbookPaths, Settings};

static LOGGING_INIT: Once = Once::new();

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "CHECKBOOK_LOG";

/// Install the global subscriber writing to `paths.log_file()`
///
/// The filter comes from `CHECKBOOK_LOG`, else from settings. If the log
/// file cannot be opened, logging stays off.
pub fn init(paths: &CheckbookPaths, settings: &Settings) {
    LOGGING_INIT.call_once(|| {
        if paths.ensure_directories().is_err() {
            return;
        }
        let Ok(file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(paths.log_file())
        else {
            return;
        };

        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(&settings.log_filter))
            .unwrap_or_else(|_| EnvFilter::new("checkbook=info"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init();

        tracing::debug!(log_file = %paths.log_file().display(), "logging initialized");
    });
}
