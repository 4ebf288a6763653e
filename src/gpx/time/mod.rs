use crate::gpx::time::error::{TimeError, TimeResult};
use chrono::{DateTime, Datelike, NaiveDateTime};
use lazy_static::lazy_static;
use regex::{Match, Regex};

pub mod error;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";
const UTC_DESIGNATOR: char = 'Z';

lazy_static! {
    static ref TIME_TAG_RE: Regex = Regex::new(r"<time>(.+)</time>").unwrap();
    static ref PROFILE_RE: Regex =
        Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z$").unwrap();
}

/// Finds the text between `<time>` and `</time>` on a line, if any.
///
/// Only one time tag per line is supported; the match spans from the first
/// opening tag to the last closing tag.
pub fn find_timestamp(line: &str) -> Option<Match<'_>> {
    TIME_TAG_RE.captures(line).and_then(|captures| captures.get(1))
}

/// Parses a GPX timestamp such as `2017-03-05T15:22:07.000Z` into whole
/// seconds since the unix epoch, interpreted as UTC.
///
/// Milliseconds are accepted but truncated, so formatting the result again
/// only reproduces `text` exactly when its milliseconds were `.000`.
pub fn parse_timestamp(text: &str) -> TimeResult<i64> {
    let Some(naive) = text.strip_suffix(UTC_DESIGNATOR) else {
        return Err(TimeError::MissingUtcDesignator(text.to_string()));
    };

    if !PROFILE_RE.is_match(text) {
        return Err(TimeError::InvalidProfile(text.to_string()));
    }

    let parsed = NaiveDateTime::parse_from_str(naive, TIMESTAMP_FORMAT).map_err(|source| {
        TimeError::InvalidTimestamp {
            text: text.to_string(),
            source,
        }
    })?;

    Ok(parsed.and_utc().timestamp())
}

/// Formats whole seconds since the unix epoch as a GPX timestamp, always
/// with `.000` milliseconds and a trailing `Z`.
///
/// Years outside `0000..=9999` are rejected since they cannot be written in
/// the four digit year field.
pub fn format_timestamp(epoch: i64) -> TimeResult<String> {
    let time = DateTime::from_timestamp(epoch, 0).ok_or(TimeError::OutOfRange(epoch))?;

    if !(0..=9999).contains(&time.year()) {
        return Err(TimeError::OutOfRange(epoch));
    }

    Ok(format!("{}{UTC_DESIGNATOR}", time.format(TIMESTAMP_FORMAT)))
}

/// Renders a signed number of seconds as `[-][Nd ]HH:MM:SS` for log output.
pub fn describe_delta(delta: i64) -> String {
    let sign = if delta < 0 { "-" } else { "" };
    let total = delta.unsigned_abs();

    let days = total / 86_400;
    let hours = total % 86_400 / 3_600;
    let minutes = total % 3_600 / 60;
    let seconds = total % 60;

    if days > 0 {
        format!("{sign}{days}d {hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
    }
}
