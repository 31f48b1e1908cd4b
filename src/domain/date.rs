//! Date keys for journal entries

use chrono::{Local, NaiveDate};

/// Format used for journal keys (ISO-8601 calendar date)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Key for a calendar date
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Key for the local calendar date right now
pub fn today_key() -> String {
    date_key(Local::now().date_naive())
}
