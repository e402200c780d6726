//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;

/// Create `.moodlog/` with a default config at `path`, creating `path` if needed.
pub fn init(path: &Path) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::new();
    repo.save_config(&config)?;
    log::info!("initialized mood journal at {}", path.display());

    Ok(config)
}
