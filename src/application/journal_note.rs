//! Journal note use case
//!
//! Edits the note of today's entry. A note needs a logged mood to attach to,
//! so this fails with `EntryNotFound` until one exists.

use crate::domain::{store::date_key, EntryUpdate, MoodStore};
use crate::error::{MoodlogError, Result};
use crate::infrastructure::{EditorSession, KeyValueStorage};
use std::path::Path;

/// Replace today's note. An empty `text` clears it.
pub fn set_today_note<S: KeyValueStorage>(store: &mut MoodStore<S>, text: &str) -> Result<()> {
    let id = today_entry_id(store)?;

    let text = text.trim();
    let update = if text.is_empty() {
        EntryUpdate::default().clear_note()
    } else {
        EntryUpdate::default().note(text)
    };

    store.update_entry(&id, update)
}

/// Open today's note in `editor`, seeded with the current text, and save the result
pub fn edit_today_note<S: KeyValueStorage>(
    store: &mut MoodStore<S>,
    editor: &EditorSession,
    draft: &Path,
) -> Result<()> {
    let current = match store.today_entry() {
        Some(entry) => entry.note.clone().unwrap_or_default(),
        None => return Err(MoodlogError::EntryNotFound(date_key(store.today()))),
    };

    let edited = editor.edit(draft, &current)?;
    if edited == current {
        log::debug!("note unchanged; nothing to save");
        return Ok(());
    }

    set_today_note(store, &edited)
}

fn today_entry_id<S: KeyValueStorage>(store: &MoodStore<S>) -> Result<String> {
    store
        .today_entry()
        .map(|entry| entry.id.clone())
        .ok_or_else(|| MoodlogError::EntryNotFound(date_key(store.today())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MoodLevel;
    use crate::infrastructure::{FixedClock, MemoryStorage};
    use chrono::NaiveDate;

    fn store(storage: &MemoryStorage) -> MoodStore<&MemoryStorage> {
        MoodStore::open(
            storage,
            Box::new(FixedClock(NaiveDate::from_ymd_opt(2025, 1, 17).unwrap())),
        )
    }

    #[test]
    fn test_note_requires_today_entry() {
        let storage = MemoryStorage::new();
        let mut store = store(&storage);

        match set_today_note(&mut store, "hello") {
            Err(MoodlogError::EntryNotFound(date)) => assert_eq!(date, "2025-01-17"),
            other => panic!("expected EntryNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_note_keeps_mood_and_activities() {
        let storage = MemoryStorage::new();
        let mut store = store(&storage);
        store
            .add_entry(MoodLevel::Bad, None, Some(vec!["work".to_string()]))
            .unwrap();

        set_today_note(&mut store, "  long day  ").unwrap();

        let entry = store.today_entry().unwrap();
        assert_eq!(entry.note.as_deref(), Some("long day"));
        assert_eq!(entry.mood, MoodLevel::Bad);
        assert_eq!(entry.activities, Some(vec!["work".to_string()]));
    }

    #[test]
    fn test_empty_note_clears() {
        let storage = MemoryStorage::new();
        let mut store = store(&storage);
        store
            .add_entry(MoodLevel::Good, Some("old".to_string()), None)
            .unwrap();

        set_today_note(&mut store, "   ").unwrap();

        assert_eq!(store.today_entry().unwrap().note, None);
    }

    #[cfg(unix)]
    #[test]
    fn test_edit_unchanged_note_keeps_entry() {
        let temp = tempfile::TempDir::new().unwrap();
        let storage = MemoryStorage::new();
        let mut store = store(&storage);
        store
            .add_entry(MoodLevel::Good, Some("same".to_string()), None)
            .unwrap();

        edit_today_note(
            &mut store,
            &EditorSession::new("true".to_string()),
            &temp.path().join("NOTE_EDITMSG"),
        )
        .unwrap();

        assert_eq!(store.today_entry().unwrap().note.as_deref(), Some("same"));
    }
}
