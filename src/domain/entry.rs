//! Mood entries and partial updates

use crate::domain::MoodLevel;
use serde::{Deserialize, Serialize};

/// One logged day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: String,
    /// Calendar day as `YYYY-MM-DD`
    pub date: String,
    pub mood: MoodLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<String>>,
}

impl MoodEntry {
    pub fn new(
        id: String,
        date: String,
        mood: MoodLevel,
        note: Option<String>,
        activities: Option<Vec<String>>,
    ) -> Self {
        MoodEntry {
            id,
            date,
            mood,
            note,
            activities,
        }
    }

    /// Merge a partial update into this entry. `id` and `date` never change.
    pub fn apply(&mut self, update: EntryUpdate) {
        if let Some(mood) = update.mood {
            self.mood = mood;
        }
        if let Some(note) = update.note {
            self.note = note;
        }
        if let Some(activities) = update.activities {
            self.activities = activities;
        }
    }
}

/// Partial update of an entry's mutable fields.
///
/// The outer `Option` says whether a field is touched; for `note` and
/// `activities` the inner `Option` is the new value, so `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryUpdate {
    pub mood: Option<MoodLevel>,
    pub note: Option<Option<String>>,
    pub activities: Option<Option<Vec<String>>>,
}

impl EntryUpdate {
    /// An update that overwrites all three fields, absent inputs included
    pub fn replace_all(
        mood: MoodLevel,
        note: Option<String>,
        activities: Option<Vec<String>>,
    ) -> Self {
        EntryUpdate {
            mood: Some(mood),
            note: Some(note),
            activities: Some(activities),
        }
    }

    pub fn mood(mut self, mood: MoodLevel) -> Self {
        self.mood = Some(mood);
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(Some(note.into()));
        self
    }

    pub fn clear_note(mut self) -> Self {
        self.note = Some(None);
        self
    }

    pub fn activities(mut self, activities: Vec<String>) -> Self {
        self.activities = Some(Some(activities));
        self
    }

    pub fn clear_activities(mut self) -> Self {
        self.activities = Some(None);
        self
    }

    /// True when applying this update would change nothing
    pub fn is_empty(&self) -> bool {
        self.mood.is_none() && self.note.is_none() && self.activities.is_none()
    }
}
