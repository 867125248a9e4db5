//! Date/time display for offer cards
//!
//! Black-box formatter: clock time as `HH:MM`, date as `Mon D, YYYY`, both in
//! the offset the timestamp was written in (airport local time). Text that
//! does not parse as a timestamp is shown as-is.

use chrono::{DateTime, NaiveDateTime};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

/// Clock time, e.g. `08:05`
pub fn format_clock(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_string(), |ts| ts.format("%H:%M").to_string())
}

/// Calendar date, e.g. `Jun 1, 2025`
pub fn format_day(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_string(), |ts| ts.format("%b %-d, %Y").to_string())
}

/// First word of an airport display string (`"NYC John F. Kennedy"` -> `"NYC"`)
pub fn short_place(display: &str) -> &str {
    display.split(' ').next().unwrap_or(display)
}
