//! Where the checkbook keeps its settings, log and default account
//!
//! The base directory is the first of:
//!
//! 1. `CHECKBOOK_DIR`
//! 2. `$XDG_CONFIG_HOME/checkbook`, then `$HOME/.config/checkbook` (Unix)
//! 3. `%APPDATA%\checkbook` (Windows)
//!
//! Everything else hangs off it: `config.json`, `checkbook.log` and
//! `data/checkbook.json`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CheckbookError, CheckbookResult};

const APP_DIR: &str = "checkbook";

/// Base directory and the files derived from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckbookPaths {
    base_dir: PathBuf,
}

impl CheckbookPaths {
    /// Resolve the base directory from the process environment
    pub fn new() -> CheckbookResult<Self> {
        resolve_base_dir(|name| std::env::var(name).ok()).map(Self::with_base_dir)
    }

    /// Use `base_dir` as is
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("checkbook.log")
    }

    /// Account file used when none is given on the command line or in settings
    pub fn default_account_file(&self) -> PathBuf {
        self.data_dir().join("checkbook.json")
    }

    /// Create the base and data directories if needed
    pub fn ensure_directories(&self) -> CheckbookResult<()> {
        let data_dir = self.data_dir();
        fs::create_dir_all(&data_dir).map_err(|e| {
            CheckbookError::Io(format!("Failed to create {}: {}", data_dir.display(), e))
        })
    }
}

/// Pick the base directory, reading variables through `var`
fn resolve_base_dir(var: impl Fn(&str) -> Option<String>) -> CheckbookResult<PathBuf> {
    let non_empty = |name: &str| var(name).filter(|v| !v.is_empty()).map(PathBuf::from);

    if let Some(custom) = non_empty("CHECKBOOK_DIR") {
        return Ok(custom);
    }

    let config_home = if cfg!(windows) {
        non_empty("APPDATA")
    } else {
        non_empty("XDG_CONFIG_HOME").or_else(|| non_empty("HOME").map(|h| h.join(".config")))
    };

    config_home
        .map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| CheckbookError::Config("Could not determine a configuration directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_override_wins() {
        let dir = resolve_base_dir(env(&[
            ("CHECKBOOK_DIR", "/srv/books"),
            ("XDG_CONFIG_HOME", "/xdg"),
            ("HOME", "/home/pat"),
            ("APPDATA", "/appdata"),
        ]))
        .unwrap();
        assert_eq!(dir, PathBuf::from("/srv/books"));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_unix_fallbacks() {
        let xdg = resolve_base_dir(env(&[("XDG_CONFIG_HOME", "/xdg"), ("HOME", "/home/pat")]));
        assert_eq!(xdg.unwrap(), PathBuf::from("/xdg/checkbook"));

        let home = resolve_base_dir(env(&[("CHECKBOOK_DIR", ""), ("HOME", "/home/pat")]));
        assert_eq!(home.unwrap(), PathBuf::from("/home/pat/.config/checkbook"));
    }

    #[test]
    fn test_nothing_to_go_on() {
        let err = resolve_base_dir(env(&[])).unwrap_err();
        assert!(matches!(err, CheckbookError::Config(_)));
    }

    #[test]
    fn test_derived_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CheckbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.log_file(), temp_dir.path().join("checkbook.log"));
        assert_eq!(
            paths.default_account_file(),
            temp_dir.path().join("data").join("checkbook.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CheckbookPaths::with_base_dir(temp_dir.path().join("cb"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().is_dir());
        assert!(paths.data_dir().is_dir());
    }
}
