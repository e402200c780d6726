//! Error types for moodlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for moodlog application
#[derive(Debug, Error)]
pub enum MoodlogError {
    #[error("Not a moodlog directory: {0}")]
    NotMoodlogDirectory(PathBuf),

    #[error("Invalid date reference: {0}")]
    InvalidDateReference(String),

    #[error("Invalid mood: {0}")]
    InvalidMood(String),

    #[error("No entry for {0}")]
    EntryNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse config.toml: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodlogError::NotMoodlogDirectory(_) => 2,
            MoodlogError::InvalidDateReference(_) => 3,
            MoodlogError::EntryNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodlogError::NotMoodlogDirectory(path) => {
                format!(
                    "Not a moodlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodlog init' in this directory to start a mood journal\n\
                    • Navigate to an existing moodlog directory\n\
                    • Set MOODLOG_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodlogError::InvalidDateReference(ref_str) => {
                format!(
                    "Invalid date reference: '{}'\n\n\
                    Valid date references:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, next friday, etc.\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2025-01-17)\n\n\
                    Examples:\n\
                    moodlog show yesterday\n\
                    moodlog show last monday\n\
                    moodlog show 2025-01-15",
                    ref_str
                )
            }
            MoodlogError::InvalidMood(value) => {
                format!(
                    "Invalid mood: '{}'\n\n\
                    Valid moods: great, good, neutral (or okay), bad, terrible\n\
                    Example: moodlog log good --note \"Nice walk\"",
                    value
                )
            }
            MoodlogError::EntryNotFound(date) => {
                format!(
                    "No entry for {}\n\n\
                    Suggestions:\n\
                    • Log a mood first: moodlog log <mood>\n\
                    • Use 'moodlog history' to see existing entries",
                    date
                )
            }
            MoodlogError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: moodlog config editor 'vim'\n\
                    • Pass the note inline: moodlog note \"Slept well\"",
                    msg
                )
            }
            MoodlogError::Config(msg) => {
                if msg.contains("history_limit") {
                    format!(
                        "{}\n\n\
                        history_limit must be a positive whole number\n\
                        Example: moodlog config history_limit 5",
                        msg
                    )
                } else if msg.contains("month") {
                    format!(
                        "{}\n\n\
                        Expected format: YYYY-MM\n\
                        Example: moodlog calendar 2025-01",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodlogError
pub type Result<T> = std::result::Result<T, MoodlogError>;
