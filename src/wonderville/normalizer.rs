use crate::error::ScrapeError;
use chrono::{DateTime, Days, NaiveDate, Utc};
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use scraper::Html;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Events expire at this UTC time on the day after they happen
const EXPIRATION_HOUR: u32 = 2;

lazy_static! {
    static ref DATE_SEPARATOR: Regex = Regex::new(r"[\s,]+").expect("Failed to create date regex");
    static ref LINE_BREAK: Regex =
        Regex::new(r"(?i)<br\s*/?>").expect("Failed to create line break regex");
}

/// Parses `Friday, Mar 15, 2024` into its calendar date.
///
/// The weekday is not checked against the date. Tokens after the year are ignored.
pub fn format_date(date_text: &str) -> Result<NaiveDate, ScrapeError> {
    let malformed = || ScrapeError::MalformedDate(date_text.to_string());

    let (_weekday, month, day, year) = DATE_SEPARATOR
        .split(date_text.trim())
        .next_tuple()
        .ok_or_else(malformed)?;

    let month_index = MONTHS
        .iter()
        .position(|&name| name == month)
        .ok_or_else(malformed)?;
    let day: u32 = day.parse().map_err(|_| malformed())?;
    let year: i32 = year.parse().map_err(|_| malformed())?;

    NaiveDate::from_ymd_opt(year, month_index as u32 + 1, day).ok_or_else(malformed)
}

/// Turns the description paragraph markup into plain text, keeping `<br>` as line breaks.
pub fn format_excerpt(excerpt_html: &str) -> String {
    let with_newlines = LINE_BREAK.replace_all(excerpt_html, "\n");
    let with_newlines = with_newlines.trim();

    if with_newlines.is_empty() {
        return String::new();
    }

    Html::parse_fragment(with_newlines)
        .root_element()
        .text()
        .collect()
}

/// The day after `event_date` at 02:00 UTC.
/// Fails when that day is past the last representable date.
pub fn calculate_expires_at(event_date: NaiveDate) -> Result<DateTime<Utc>, ScrapeError> {
    event_date
        .checked_add_days(Days::new(1))
        .and_then(|next_day| next_day.and_hms_opt(EXPIRATION_HOUR, 0, 0))
        .map(|expiration| expiration.and_utc())
        .ok_or_else(|| ScrapeError::MalformedDate(event_date.to_string()))
}
