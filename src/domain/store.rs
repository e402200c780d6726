//! Mood entry store
//!
//! Owns the ordered entry collection, writes it through to a key-value slot
//! after every mutation and answers date lookups. Dates are compared as their
//! `YYYY-MM-DD` strings for equality and as `NaiveDate`s for ranges; no time
//! zone is ever involved.

use crate::domain::{EntryUpdate, MoodEntry, MoodLevel};
use crate::error::Result;
use crate::infrastructure::{Clock, KeyValueStorage};
use chrono::{Datelike, Duration, NaiveDate};
use log::{debug, warn};
use std::collections::BTreeMap;

/// Storage key holding the serialized entry array
pub const ENTRIES_KEY: &str = "moodEntries";

/// Format of `MoodEntry::date`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Days before today still counted as "last week" (inclusive)
const LAST_WEEK_DAYS: i64 = 7;

/// What `add_entry` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Created,
    Updated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// User-facing confirmation of a successful write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: &'static str,
    pub description: &'static str,
    pub variant: NotificationVariant,
}

impl Notification {
    const LOGGED: Notification = Notification {
        title: "Mood logged",
        description: "Your mood has been recorded for today",
        variant: NotificationVariant::Default,
    };

    const UPDATED: Notification = Notification {
        title: "Mood updated",
        description: "Your mood for today has been updated",
        variant: NotificationVariant::Default,
    };

    const DELETED: Notification = Notification {
        title: "Entry deleted",
        description: "Your mood entry has been removed",
        variant: NotificationVariant::Destructive,
    };
}

/// Format a day the way entries store it
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a stored entry date
pub fn parse_date_key(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}

/// Single source of truth for mood entries
pub struct MoodStore<S: KeyValueStorage> {
    storage: S,
    clock: Box<dyn Clock>,
    entries: Vec<MoodEntry>,
    notifications: Vec<Notification>,
}

impl<S: KeyValueStorage> MoodStore<S> {
    /// Load the collection from `storage`. Missing or unreadable data starts empty.
    pub fn open(storage: S, clock: Box<dyn Clock>) -> Self {
        let entries = load_entries(&storage);
        debug!("loaded {} mood entries", entries.len());

        MoodStore {
            storage,
            clock,
            entries,
            notifications: Vec::new(),
        }
    }

    /// All entries, newest first
    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    /// Current local calendar day according to the injected clock
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Log a mood for today, overwriting today's entry if there is one
    pub fn add_entry(
        &mut self,
        mood: MoodLevel,
        note: Option<String>,
        activities: Option<Vec<String>>,
    ) -> Result<AddOutcome> {
        let today = date_key(self.today());

        if let Some(existing) = self.entry_by_date(&today) {
            let id = existing.id.clone();
            self.update_entry(&id, EntryUpdate::replace_all(mood, note, activities))?;
            self.notifications.push(Notification::UPDATED);
            return Ok(AddOutcome::Updated);
        }

        let entry = MoodEntry::new(
            uuid::Uuid::new_v4().to_string(),
            today,
            mood,
            note,
            activities,
        );
        debug!("created entry {} for {}", entry.id, entry.date);
        let mut next = Vec::with_capacity(self.entries.len() + 1);
        next.push(entry);
        next.extend(self.entries.iter().cloned());
        self.commit(next)?;
        self.notifications.push(Notification::LOGGED);

        Ok(AddOutcome::Created)
    }

    /// Merge `update` into the entry with `id`. Unknown ids are ignored.
    pub fn update_entry(&mut self, id: &str, update: EntryUpdate) -> Result<()> {
        let Some(index) = self.entries.iter().position(|entry| entry.id == id) else {
            debug!("update ignored: no entry with id {}", id);
            return Ok(());
        };

        let mut next = self.entries.clone();
        next[index].apply(update);
        debug!("updated entry {} for {}", next[index].id, next[index].date);
        self.commit(next)
    }

    /// Remove the entry with `id`. Unknown ids leave the collection untouched.
    pub fn delete_entry(&mut self, id: &str) -> Result<()> {
        if !self.entries.iter().any(|entry| entry.id == id) {
            debug!("delete ignored: no entry with id {}", id);
            return Ok(());
        }

        let next: Vec<MoodEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.id != id)
            .cloned()
            .collect();
        self.commit(next)?;
        debug!("deleted entry {}", id);
        self.notifications.push(Notification::DELETED);
        Ok(())
    }

    /// The entry logged on `date` (`YYYY-MM-DD`)
    pub fn entry_by_date(&self, date: &str) -> Option<&MoodEntry> {
        self.entries.iter().find(|entry| entry.date == date)
    }

    pub fn today_entry(&self) -> Option<&MoodEntry> {
        self.entry_by_date(&date_key(self.today()))
    }

    /// Entries dated within the last seven days, today included, in collection order
    pub fn last_week_entries(&self) -> Vec<&MoodEntry> {
        let today = self.today();
        let week_ago = today - Duration::days(LAST_WEEK_DAYS);

        self.entries
            .iter()
            .filter(|entry| {
                parse_date_key(&entry.date)
                    .map(|date| date >= week_ago && date <= today)
                    .unwrap_or(false)
            })
            .collect()
    }

    /// The first `limit` entries
    pub fn recent(&self, limit: usize) -> &[MoodEntry] {
        &self.entries[..limit.min(self.entries.len())]
    }

    /// Mood per logged day of one month, for the calendar view
    pub fn month_moods(&self, year: i32, month: u32) -> BTreeMap<NaiveDate, MoodLevel> {
        self.entries
            .iter()
            .filter_map(|entry| parse_date_key(&entry.date).map(|date| (date, entry.mood)))
            .filter(|(date, _)| date.year() == year && date.month() == month)
            .collect()
    }

    /// Drain confirmations queued by successful writes
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Write `next` to storage, then make it the visible collection.
    /// On failure the previous collection stays in place.
    fn commit(&mut self, next: Vec<MoodEntry>) -> Result<()> {
        let serialized = serde_json::to_string(&next)?;
        self.storage.set(ENTRIES_KEY, &serialized)?;
        self.entries = next;
        Ok(())
    }
}

fn load_entries<S: KeyValueStorage>(storage: &S) -> Vec<MoodEntry> {
    let raw = match storage.get(ENTRIES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("could not read {}: {}; starting empty", ENTRIES_KEY, e);
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("discarding malformed {}: {}", ENTRIES_KEY, e);
            Vec::new()
        }
    }
}
