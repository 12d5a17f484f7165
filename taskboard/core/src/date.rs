use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Utc};

/// Text shown in place of a timestamp that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Formats a timestamp as an `es-ES` short date (`30/1/2025`) in its own time zone.
///
/// Day and month are not zero padded.
pub fn format_es_date<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String {
    format!(
        "{}/{}/{}",
        timestamp.day(),
        timestamp.month(),
        timestamp.year()
    )
}

/// Formats a stored instant as the calendar date on the user's clock.
pub fn format_local_date(timestamp: &DateTime<Utc>) -> String {
    format_es_date(&timestamp.with_timezone(&Local))
}

/// Parses a remote timestamp and formats it for display in the user's time zone.
pub fn parse_and_format(raw: &str) -> String {
    parse_and_format_in(raw, &Local)
}

/// Parses RFC 3339, or a bare `YYYY-MM-DD` taken as UTC midnight, and formats it in `tz`.
pub fn parse_and_format_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String {
    match parse_timestamp(raw) {
        Some(instant) => format_es_date(&instant.with_timezone(tz)),
        None => {
            tracing::debug!(raw, "unparseable timestamp");
            INVALID_DATE.to_string()
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}
