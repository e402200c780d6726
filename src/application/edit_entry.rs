//! Log and edit use cases: turning command-line fields into store writes

use crate::domain::{AddOutcome, EntryUpdate, MoodLevel, MoodStore};
use crate::error::{MoodlogError, Result};
use crate::infrastructure::KeyValueStorage;
use log::debug;
use std::str::FromStr;

/// Fields for an explicit edit of one entry
#[derive(Debug, Clone, Default)]
pub struct EditOptions {
    pub mood: Option<String>,
    pub note: Option<String>,
    pub clear_note: bool,
    pub activities: Vec<String>,
    pub clear_activities: bool,
}

pub fn parse_mood(value: &str) -> Result<MoodLevel> {
    MoodLevel::from_str(value).map_err(MoodlogError::InvalidMood)
}

/// Normalize activity arguments: split on commas, trim, drop blanks and repeats.
/// `None` when nothing is left.
pub fn collect_activities(raw: &[String]) -> Option<Vec<String>> {
    let mut activities: Vec<String> = Vec::new();
    for tag in raw.iter().flat_map(|arg| arg.split(',')) {
        let tag = tag.trim();
        if !tag.is_empty() && !activities.iter().any(|seen| seen == tag) {
            activities.push(tag.to_string());
        }
    }

    if activities.is_empty() {
        None
    } else {
        Some(activities)
    }
}

/// Log today's mood (creating or overwriting today's entry)
pub fn log_mood<S: KeyValueStorage>(
    store: &mut MoodStore<S>,
    mood: &str,
    note: Option<String>,
    activities: &[String],
) -> Result<AddOutcome> {
    let mood = parse_mood(mood)?;
    let note = note
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty());

    store.add_entry(mood, note, collect_activities(activities))
}

impl EditOptions {
    pub fn to_update(&self) -> Result<EntryUpdate> {
        let mut update = EntryUpdate::default();

        if let Some(mood) = &self.mood {
            update = update.mood(parse_mood(mood)?);
        }

        if self.clear_note {
            update = update.clear_note();
        } else if let Some(note) = &self.note {
            update = update.note(note.trim());
        }

        if self.clear_activities {
            update = update.clear_activities();
        } else if let Some(activities) = collect_activities(&self.activities) {
            update = update.activities(activities);
        }

        Ok(update)
    }
}

/// Apply `options` to the entry with `id`. Returns whether such an entry exists.
pub fn edit_entry<S: KeyValueStorage>(
    store: &mut MoodStore<S>,
    id: &str,
    options: &EditOptions,
) -> Result<bool> {
    let update = options.to_update()?;
    let exists = store.entries().iter().any(|entry| entry.id == id);

    if update.is_empty() {
        debug!("edit of {} has no fields; skipping write", id);
        return Ok(exists);
    }
    store.update_entry(id, update)?;
    Ok(exists)
}
