//! Domain layer - Mood entries, the entry store and derived views

pub mod date_ref;
pub mod entry;
pub mod mood;
pub mod stats;
pub mod store;

pub use date_ref::{parse_month, DateReference};
pub use entry::{EntryUpdate, MoodEntry};
pub use mood::MoodLevel;
pub use stats::{MoodShare, MoodStats};
pub use store::{AddOutcome, MoodStore, Notification, NotificationVariant};
