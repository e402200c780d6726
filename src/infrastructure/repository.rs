//! Journal directory discovery and layout

use crate::error::{MoodlogError, Result};
use crate::infrastructure::config::MOODLOG_DIR;
use crate::infrastructure::{Config, FileStorage};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for journal metadata
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .moodlog/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .moodlog/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .moodlog directory exists
    fn is_initialized(&self) -> bool;

    /// Create .moodlog directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Locate the journal: `MOODLOG_ROOT` first, then walk up from the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MOODLOG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_moodlog_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            }
            return Err(MoodlogError::Config(format!(
                "MOODLOG_ROOT is set to '{}' but no .moodlog directory found. \
                Run 'moodlog init' in that directory or unset MOODLOG_ROOT.",
                path.display()
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing `.moodlog` is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_moodlog_dir(dir))
            .map(|dir| FileSystemRepository::new(dir.to_path_buf()))
            .ok_or_else(|| MoodlogError::NotMoodlogDirectory(start.to_path_buf()))
    }

    /// Slot storage for the entry store, kept inside `.moodlog`
    pub fn entry_storage(&self) -> FileStorage {
        FileStorage::new(self.moodlog_dir())
    }

    /// Scratch file used when editing a note in an external editor
    pub fn note_draft_path(&self) -> PathBuf {
        self.moodlog_dir().join("NOTE_EDITMSG")
    }

    fn moodlog_dir(&self) -> PathBuf {
        self.root.join(MOODLOG_DIR)
    }

    fn has_moodlog_dir(path: &Path) -> bool {
        path.join(MOODLOG_DIR).is_dir()
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_moodlog_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(MoodlogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(self.moodlog_dir())?;
        Ok(())
    }
}
