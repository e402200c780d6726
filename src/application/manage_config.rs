//! Config management use case

use crate::error::{MoodlogError, Result};
use crate::infrastructure::logging::SUPPORTED_LEVELS;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

const VALID_KEYS: &str = "editor, history_limit, log_level";

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "editor" => Ok(config.editor),
            "history_limit" => Ok(config.history_limit.to_string()),
            "log_level" => Ok(config.log_level),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "editor" => config.editor = value.to_string(),
            "history_limit" => {
                config.history_limit = value
                    .parse::<usize>()
                    .ok()
                    .filter(|limit| *limit > 0)
                    .ok_or_else(|| {
                        MoodlogError::Config(format!("Invalid history_limit: '{}'", value))
                    })?;
            }
            "log_level" => {
                let level = value.trim().to_ascii_lowercase();
                if !SUPPORTED_LEVELS.contains(&level.as_str()) {
                    return Err(MoodlogError::Config(format!(
                        "Invalid log_level: '{}'. Valid levels are: {}",
                        value,
                        SUPPORTED_LEVELS.join(", ")
                    )));
                }
                config.log_level = level;
            }
            "created" => {
                return Err(MoodlogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => return Err(unknown_key(key)),
        }

        self.repository.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn unknown_key(key: &str) -> MoodlogError {
    MoodlogError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, VALID_KEYS
    ))
}
