//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Daily mood journal for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new mood journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Log how you feel today (overwrites today's entry if there is one)
    Log {
        /// great, good, neutral (or okay), bad, terrible
        mood: String,

        /// Journal note for the day
        #[arg(short, long)]
        note: Option<String>,

        /// Activity tag; repeat or separate with commas
        #[arg(short = 'a', long = "activity", value_name = "ACTIVITY")]
        activities: Vec<String>,
    },

    /// Write today's journal note (opens the editor when no text is given)
    Note {
        /// Note text; an empty string clears the note
        text: Option<String>,
    },

    /// Change fields of an existing entry
    Edit {
        /// Entry id (see `moodlog show`)
        id: String,

        #[arg(short, long)]
        mood: Option<String>,

        #[arg(short, long, conflicts_with = "clear_note")]
        note: Option<String>,

        /// Remove the note
        #[arg(long)]
        clear_note: bool,

        /// Replacement activity tags
        #[arg(
            short = 'a',
            long = "activity",
            value_name = "ACTIVITY",
            conflicts_with = "clear_activities"
        )]
        activities: Vec<String>,

        /// Remove all activity tags
        #[arg(long)]
        clear_activities: bool,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: String,
    },

    /// Show the entry for a day (e.g., today, yesterday, last monday, 2025-01-17)
    Show {
        #[arg(value_name = "DATE", num_args = 0..)]
        date: Vec<String>,
    },

    /// List the most recent entries
    History {
        /// Number of entries (default: config history_limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List entries from the last seven days
    Week,

    /// Month view with each logged day marked by its mood
    Calendar {
        /// Month as YYYY-MM (default: current month)
        month: Option<String>,
    },

    /// Mood frequencies and dominant mood
    Stats {
        /// Only count entries from the last seven days
        #[arg(short, long)]
        week: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
