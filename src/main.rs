use chrono::Datelike;
use clap::Parser;
use moodlog::application::{
    edit_entry, edit_today_note, init::init, log_mood, manage_config::ConfigService,
    set_today_note, EditOptions, JournalSession,
};
use moodlog::cli::{
    format_calendar, format_entry, format_entry_list, format_notification, format_stats, Cli,
    Commands,
};
use moodlog::domain::{parse_month, AddOutcome, MoodStats};
use moodlog::error::MoodlogError;
use moodlog::infrastructure::{
    clock_from_env, init_logging, EditorSession, FileSystemRepository, JournalRepository,
};

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MoodlogError> {
    match cli.command {
        Commands::Init { path } => {
            start_logging(None);
            init(&path)?;
            println!("Initialized moodlog journal at {}", path.display());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            start_logging(None);
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("editor = {}", config.editor);
                println!("history_limit = {}", config.history_limit);
                println!("log_level = {}", config.log_level);
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: moodlog config [--list | <key> [<value>]]");
                println!("Valid keys: editor, history_limit, log_level");
            }
            Ok(())
        }
        command => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            start_logging(Some(config.get_log_level().as_str()));

            let mut session = JournalSession::new(repo, config, clock_from_env());
            run_journal_command(&mut session, command)
        }
    }
}

fn run_journal_command(
    session: &mut JournalSession,
    command: Commands,
) -> Result<(), MoodlogError> {
    match command {
        Commands::Log {
            mood,
            note,
            activities,
        } => {
            let outcome = log_mood(&mut session.store, &mood, note, &activities)?;
            log::info!("log command finished: {:?}", outcome);
            if outcome == AddOutcome::Created {
                if let Some(entry) = session.store.today_entry() {
                    println!("id: {}", entry.id);
                }
            }
        }
        Commands::Note { text } => match text {
            Some(text) => set_today_note(&mut session.store, &text)?,
            None => {
                let editor = EditorSession::new(session.config.get_editor());
                let draft = session.repository.note_draft_path();
                edit_today_note(&mut session.store, &editor, &draft)?;
            }
        },
        Commands::Edit {
            id,
            mood,
            note,
            clear_note,
            activities,
            clear_activities,
        } => {
            let options = EditOptions {
                mood,
                note,
                clear_note,
                activities,
                clear_activities,
            };
            if edit_entry(&mut session.store, &id, &options)? {
                println!("Updated entry {}", id);
            } else {
                println!("No entry with id {}", id);
            }
        }
        Commands::Delete { id } => {
            let exists = session.store.entries().iter().any(|entry| entry.id == id);
            session.store.delete_entry(&id)?;
            if !exists {
                println!("No entry with id {}", id);
            }
        }
        Commands::Show { date } => {
            let reference = if date.is_empty() {
                "today".to_string()
            } else {
                date.join(" ")
            };
            let key = session.resolve_date(&reference)?;
            match session.store.entry_by_date(&key) {
                Some(entry) => print!("{}", format_entry(entry)),
                None => println!("No entry for {}", key),
            }
        }
        Commands::History { limit } => {
            let limit = limit.unwrap_or(session.config.history_limit);
            print!(
                "{}",
                with_newline(format_entry_list(
                    session.store.recent(limit),
                    "No mood entries yet. Start by logging your mood: moodlog log <mood>",
                ))
            );
        }
        Commands::Week => {
            print!(
                "{}",
                with_newline(format_entry_list(
                    session.store.last_week_entries(),
                    "No mood entries for the past week.",
                ))
            );
        }
        Commands::Calendar { month } => {
            let (year, month) = match month {
                Some(month) => parse_month(&month)?,
                None => {
                    let today = session.store.today();
                    (today.year(), today.month())
                }
            };
            print!(
                "{}",
                format_calendar(year, month, &session.store.month_moods(year, month))
            );
        }
        Commands::Stats { week } => {
            let stats = if week {
                MoodStats::from_entries(session.store.last_week_entries())
            } else {
                MoodStats::from_entries(session.store.entries())
            };
            print!("{}", with_newline(format_stats(&stats)));
        }
        // Handled before a session is opened
        Commands::Init { .. } | Commands::Config { .. } => {}
    }

    for notification in session.store.take_notifications() {
        println!("{}", format_notification(&notification));
    }
    Ok(())
}

fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

fn start_logging(level: Option<&str>) {
    let level = level
        .map(str::to_string)
        .or_else(|| std::env::var("MOODLOG_LOG").ok())
        .unwrap_or_else(|| "warn".to_string());

    if let Err(e) = init_logging(&level) {
        eprintln!("Warning: logging disabled: {}", e);
    }
}
