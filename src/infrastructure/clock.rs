//! Source of "today"

use chrono::{Local, NaiveDate};

/// Resolves the current local calendar day
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall clock in the local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same day
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Read `MOODLOG_TODAY` (`YYYY-MM-DD`) to pin the date, falling back to the wall clock
pub fn clock_from_env() -> Box<dyn Clock> {
    match std::env::var("MOODLOG_TODAY") {
        Ok(value) => match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
            Ok(date) => Box::new(FixedClock(date)),
            Err(_) => {
                log::warn!("ignoring MOODLOG_TODAY={:?}: expected YYYY-MM-DD", value);
                Box::new(SystemClock)
            }
        },
        Err(_) => Box::new(SystemClock),
    }
}
