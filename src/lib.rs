//! moodlog - Daily mood journal for the terminal
//!
//! Records one mood per day with an optional note and activity tags, keeps
//! the entries in a JSON slot inside a `.moodlog` directory, and renders
//! history, a month calendar and mood statistics.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{EntryUpdate, MoodEntry, MoodLevel, MoodStats, MoodStore};
pub use error::MoodlogError;
