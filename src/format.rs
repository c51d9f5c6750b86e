//! Date helpers for the views

use chrono::{DateTime, NaiveDate, Utc};

/// `dd/mm/yyyy`, as shown on cards and headers
pub fn display_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Value for an `<input type="date">`
pub fn date_input_value(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a date picker value. Blank or invalid input yields `None`.
pub fn parse_date_input(value: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
