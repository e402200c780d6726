//! An opened mood journal: its directory, config and entry store

use crate::domain::{DateReference, MoodStore};
use crate::error::Result;
use crate::infrastructure::{Clock, Config, FileStorage, FileSystemRepository};

pub struct JournalSession {
    pub repository: FileSystemRepository,
    pub config: Config,
    pub store: MoodStore<FileStorage>,
}

impl JournalSession {
    /// Open the entry store with an already loaded config
    pub fn new(repository: FileSystemRepository, config: Config, clock: Box<dyn Clock>) -> Self {
        let store = MoodStore::open(repository.entry_storage(), clock);

        JournalSession {
            repository,
            config,
            store,
        }
    }

    /// Turn a command-line date reference into a stored `YYYY-MM-DD` key
    pub fn resolve_date(&self, reference: &str) -> Result<String> {
        Ok(DateReference::parse(reference)?.resolve_key(self.store.today()))
    }
}
