//! Date references accepted on the command line

use crate::domain::store::{date_key, DATE_FORMAT};
use crate::error::{MoodlogError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A user-supplied day, resolved against "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateReference {
    /// `today` or `now`
    Today,
    Yesterday,
    Tomorrow,
    /// Bare weekday name: today if it matches, else the most recent one
    Weekday(Weekday),
    /// `last <weekday>`: strictly before today
    LastWeekday(Weekday),
    /// `next <weekday>`: strictly after today
    NextWeekday(Weekday),
    /// `YYYY-MM-DD`
    Date(NaiveDate),
}

impl DateReference {
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        let invalid = || MoodlogError::InvalidDateReference(input.to_string());

        match normalized.as_str() {
            "today" | "now" => return Ok(DateReference::Today),
            "yesterday" => return Ok(DateReference::Yesterday),
            "tomorrow" => return Ok(DateReference::Tomorrow),
            _ => {}
        }

        if let Some(rest) = normalized.strip_prefix("last ") {
            return weekday_named(rest.trim())
                .map(DateReference::LastWeekday)
                .ok_or_else(invalid);
        }
        if let Some(rest) = normalized.strip_prefix("next ") {
            return weekday_named(rest.trim())
                .map(DateReference::NextWeekday)
                .ok_or_else(invalid);
        }
        if let Some(day) = weekday_named(&normalized) {
            return Ok(DateReference::Weekday(day));
        }

        NaiveDate::parse_from_str(&normalized, DATE_FORMAT)
            .map(DateReference::Date)
            .map_err(|_| invalid())
    }

    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match *self {
            DateReference::Today => today,
            DateReference::Yesterday => today - Duration::days(1),
            DateReference::Tomorrow => today + Duration::days(1),
            DateReference::Weekday(day) => today - Duration::days(days_since(today, day)),
            DateReference::LastWeekday(day) => {
                let back = match days_since(today, day) {
                    0 => 7,
                    n => n,
                };
                today - Duration::days(back)
            }
            DateReference::NextWeekday(day) => {
                let ahead = match (7 - days_since(today, day)) % 7 {
                    0 => 7,
                    n => n,
                };
                today + Duration::days(ahead)
            }
            DateReference::Date(date) => date,
        }
    }

    /// Resolve and format as a stored entry date
    pub fn resolve_key(&self, today: NaiveDate) -> String {
        date_key(self.resolve(today))
    }
}

/// Parse a `YYYY-MM` month argument
pub fn parse_month(input: &str) -> Result<(i32, u32)> {
    let first = format!("{}-01", input.trim());
    NaiveDate::parse_from_str(&first, DATE_FORMAT)
        .map(|date| (date.year(), date.month()))
        .map_err(|_| MoodlogError::Config(format!("Invalid month: '{}'", input)))
}

/// Days from the most recent `day` (today included) up to `today`, in 0..7
fn days_since(today: NaiveDate, day: Weekday) -> i64 {
    let diff = today.weekday().num_days_from_monday() as i64 - day.num_days_from_monday() as i64;
    diff.rem_euclid(7)
}

fn weekday_named(name: &str) -> Option<Weekday> {
    match name {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}
