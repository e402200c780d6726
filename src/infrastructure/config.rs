//! Configuration management

use crate::error::{MoodlogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the per-journal metadata directory
pub const MOODLOG_DIR: &str = ".moodlog";

const CONFIG_FILE: &str = "config.toml";
const DEFAULT_HISTORY_LIMIT: usize = 3;
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub editor: String,
    /// Entries shown by `history` when no limit is given
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    pub created: DateTime<Utc>,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            editor: Self::detect_default_editor(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            created: Utc::now(),
        }
    }

    /// Load config from .moodlog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(MOODLOG_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodlogError::NotMoodlogDirectory(path.to_path_buf())
            } else {
                MoodlogError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .moodlog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let moodlog_dir = path.join(MOODLOG_DIR);

        if !moodlog_dir.exists() {
            fs::create_dir(&moodlog_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(moodlog_dir.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    /// Effective log level: `MOODLOG_LOG` wins over the stored value
    pub fn get_log_level(&self) -> String {
        std::env::var("MOODLOG_LOG").unwrap_or_else(|_| self.log_level.clone())
    }

    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}
