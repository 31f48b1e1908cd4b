//! Configuration management

use crate::error::{RosethornError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional config file in the working directory
pub const CONFIG_FILE: &str = "rosethorn.toml";

/// Journal file used when nothing else is configured
pub const DEFAULT_JOURNAL_FILE: &str = "roses_thorns_journal.json";

/// Environment variable that overrides `journal_file`
pub const JOURNAL_ENV: &str = "ROSETHORN_JOURNAL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub journal_file: PathBuf,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            journal_file: PathBuf::from(DEFAULT_JOURNAL_FILE),
            log_file: None,
        }
    }
}

impl Config {
    /// Load config from rosethorn.toml in the given directory.
    ///
    /// A missing file yields the defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(RosethornError::Io(e)),
        };

        Ok(toml::from_str(&contents)?)
    }

    /// Load config from `dir` and apply the environment override
    pub fn resolve(dir: &Path) -> Result<Self> {
        let config = Self::load_from_dir(dir)?;
        Ok(config.with_journal_override(std::env::var(JOURNAL_ENV).ok()))
    }

    fn with_journal_override(mut self, value: Option<String>) -> Self {
        if let Some(path) = value.filter(|v| !v.trim().is_empty()) {
            self.journal_file = PathBuf::from(path);
        }
        self
    }

    /// Journal file location, with relative paths resolved against `base`
    pub fn journal_path(&self, base: &Path) -> PathBuf {
        if self.journal_file.is_absolute() {
            self.journal_file.clone()
        } else {
            base.join(&self.journal_file)
        }
    }

    /// Log file location
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("rosethorn.log"))
    }
}
