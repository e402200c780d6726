//! Output formatting utilities

use crate::domain::store::parse_date_key;
use crate::domain::{MoodEntry, MoodLevel, MoodStats, Notification, NotificationVariant};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

const BAR_WIDTH: usize = 20;

/// One-line rendering of a store confirmation
pub fn format_notification(notification: &Notification) -> String {
    let prefix = match notification.variant {
        NotificationVariant::Default => "",
        NotificationVariant::Destructive => "! ",
    };
    format!(
        "{}{}: {}",
        prefix, notification.title, notification.description
    )
}

/// `Jan 17, 2025`, or the raw string when the stored date does not parse
fn display_date(date: &str) -> String {
    parse_date_key(date)
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| date.to_string())
}

/// Full view of one entry
pub fn format_entry(entry: &MoodEntry) -> String {
    let mut output = format!(
        "{}  {}\nid: {}\n",
        display_date(&entry.date),
        entry.mood.label(),
        entry.id
    );

    if let Some(activities) = entry.activities.as_ref().filter(|a| !a.is_empty()) {
        output.push_str(&format!("activities: {}\n", activities.join(", ")));
    }
    if let Some(note) = &entry.note {
        output.push('\n');
        output.push_str(note);
        output.push('\n');
    }

    output
}

/// One line per entry, or `empty_message` when there are none
pub fn format_entry_list<'a, I>(entries: I, empty_message: &str) -> String
where
    I: IntoIterator<Item = &'a MoodEntry>,
{
    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{:<13} {:<9}",
            display_date(&entry.date),
            entry.mood.label()
        ));
        if let Some(first_line) = entry.note.as_deref().and_then(|n| n.lines().next()) {
            output.push_str(&format!(" {}", first_line));
        }
        output.push_str(&format!("  [{}]\n", entry.id));
    }

    if output.is_empty() {
        return empty_message.to_string();
    }
    output
}

/// Counts, percentage bars and the dominant mood
pub fn format_stats(stats: &MoodStats) -> String {
    let Some(dominant) = stats.dominant else {
        return "No mood data yet. Start tracking to see your stats!".to_string();
    };

    let mut output = format!(
        "Based on your last {} entries\nYour dominant mood: {}\n\n",
        stats.total,
        dominant.label()
    );

    for share in &stats.shares {
        let filled = (share.percentage as usize * BAR_WIDTH + 50) / 100;
        output.push_str(&format!(
            "{:<9} {}{} {:>3}% ({})\n",
            share.mood.label(),
            "#".repeat(filled),
            ".".repeat(BAR_WIDTH - filled),
            share.percentage,
            share.count
        ));
    }

    output
}

/// Month grid, Monday first; logged days carry their mood marker
pub fn format_calendar(
    year: i32,
    month: u32,
    moods: &BTreeMap<NaiveDate, MoodLevel>,
) -> String {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return String::new();
    };

    let mut output = format!("{}\nMo  Tu  We  Th  Fr  Sa  Su\n", first.format("%B %Y"));
    let mut column = first.weekday().num_days_from_monday() as usize;
    output.push_str(&"    ".repeat(column));

    for date in first.iter_days().take_while(|d| d.month() == month) {
        let marker = moods.get(&date).map(MoodLevel::marker).unwrap_or(' ');
        output.push_str(&format!("{:>2}{} ", date.day(), marker));

        column += 1;
        if column == 7 {
            output.truncate(output.trim_end().len());
            output.push('\n');
            column = 0;
        }
    }
    if column != 0 {
        output.truncate(output.trim_end().len());
        output.push('\n');
    }

    let legend: Vec<String> = MoodLevel::ALL
        .iter()
        .map(|mood| format!("{} {}", mood.marker(), mood.label()))
        .collect();
    output.push('\n');
    output.push_str(&legend.join("  "));
    output.push('\n');

    output
}
