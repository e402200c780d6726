//! Application layer - Use cases and orchestration

pub mod edit_entry;
pub mod init;
pub mod journal_note;
pub mod manage_config;
pub mod session;

pub use edit_entry::{collect_activities, edit_entry, log_mood, parse_mood, EditOptions};
pub use journal_note::{edit_today_note, set_today_note};
pub use session::JournalSession;
