//! Birthday conversion between the service's timestamps and `<input type="date">`.
//!
//! The service stores a full timestamp (`2000-01-01T00:00:00`); the form edits
//! a calendar date (`2000-01-01`) and sends back UTC midnight with
//! millisecond precision (`2000-01-01T00:00:00.000Z`).

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use time::Date;
use time::macros::format_description;

/// A date input value that is not a valid calendar date.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid date: {0:?}")]
pub struct DateError(pub String);

fn parse_date(raw: &str) -> Result<Date, DateError> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| DateError(raw.to_owned()))
}

fn format_date(date: Date) -> String {
    // Four-digit years only; the format cannot fail for those.
    date.format(format_description!("[year]-[month]-[day]")).unwrap_or_default()
}

/// Convert a stored timestamp to a `YYYY-MM-DD` date input value.
///
/// Returns an empty string when the date part does not parse, which leaves the
/// date field blank for the user to fill in.
pub fn timestamp_to_date_input(timestamp: &str) -> String {
    let date_part = timestamp.split('T').next().unwrap_or_default();
    parse_date(date_part).map(format_date).unwrap_or_default()
}

/// Convert a `YYYY-MM-DD` date input value to the timestamp sent on the wire.
///
/// # Errors
///
/// Returns [`DateError`] if the input is not a valid calendar date.
pub fn date_input_to_timestamp(input: &str) -> Result<String, DateError> {
    let date = parse_date(input)?;
    Ok(format!("{}T00:00:00.000Z", format_date(date)))
}

/// Render a stored timestamp for table display, falling back to the raw value.
pub fn display_date(timestamp: &str) -> String {
    let date = timestamp_to_date_input(timestamp);
    if date.is_empty() { timestamp.to_owned() } else { date }
}
