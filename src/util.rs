use crate::error::{PulseError, Result};
use chrono::{DateTime, NaiveDate, Utc};

pub fn parse_day(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|e| PulseError::InvalidDate(format!("'{input}': {e}")))
}

pub fn format_timestamp(now: &DateTime<Utc>) -> String {
    now.format("%B %d, %Y at %H:%M UTC").to_string()
}
