//! Time normalization: from whatever the client sent to an hour of day
//!
//! Sources are tried in priority order and every failure falls through to
//! the next one:
//!
//! 1. `localHour` when it is an integer in `0..=23` (any other value,
//!    including a fraction or a string, falls through)
//! 2. `iso` when it parses as a timestamp
//! 3. `localTime` when it starts with `H:`/`HH:` or is a bare `Hmm`/`HHmm`
//!
//! If none resolves, the hour is unknown, which is a distinct state with its
//! own prompt.

use crate::request::LocalHour;
use crate::PromptRequest;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Longest time text echoed into a prompt, in characters
pub const MAX_TIME_TEXT_CHARS: usize = 100;

/// "H:" or "HH:" prefix, covers "HH:mm" and "HH:mm:ss"
static COLON_CLOCK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]{1,2}):").unwrap());

/// Bare "Hmm" or "HHmm"
static COMPACT_CLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{1,2})([0-9]{2})$").unwrap());

/// Minute-precision timestamp with a zone, which RFC 3339 parsing rejects
static MINUTE_PRECISION_ZONED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4}-[0-9]{2}-[0-9]{2}[Tt ][0-9]{2}:[0-9]{2})([Zz]|[+-][0-9]{2}):?([0-9]{2})?$")
        .unwrap()
});

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Which request field produced the hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HourSource {
    /// `localHour`
    LocalHour,
    /// `iso`
    Iso,
    /// `localTime`
    LocalTime,
}

/// An hour of day (0-23) recovered from the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedHour {
    /// Hour of day, 0-23
    pub hour: u8,
    /// Field it came from
    pub source: HourSource,
}

/// Resolve the request's hour of day, or `None` when it cannot be determined.
///
/// `reference` is the zone in which offset-bearing ISO timestamps are read.
pub fn resolve_hour(request: &PromptRequest, reference: FixedOffset) -> Option<ResolvedHour> {
    let from_local_hour = || {
        request
            .local_hour
            .as_ref()
            .and_then(LocalHour::as_integer)
            .and_then(hour_in_range)
            .map(|hour| ResolvedHour {
                hour,
                source: HourSource::LocalHour,
            })
    };

    let from_iso = || {
        request
            .iso
            .as_deref()
            .and_then(|iso| iso_hour(iso, reference))
            .map(|hour| ResolvedHour {
                hour,
                source: HourSource::Iso,
            })
    };

    let from_local_time = || {
        request
            .local_time
            .as_deref()
            .and_then(|text| clock_hour(&sanitize_time_text(text)))
            .map(|hour| ResolvedHour {
                hour,
                source: HourSource::LocalTime,
            })
    };

    from_local_hour().or_else(from_iso).or_else(from_local_time)
}

/// Clean client time text before it is parsed or echoed.
///
/// Newlines, carriage returns and backticks become spaces, the result is
/// trimmed and capped at [`MAX_TIME_TEXT_CHARS`] characters. Applying it twice
/// gives the same string.
pub fn sanitize_time_text(raw: &str) -> String {
    let replaced: String = raw
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '`' => ' ',
            c => c,
        })
        .collect();

    let capped: String = replaced.trim().chars().take(MAX_TIME_TEXT_CHARS).collect();
    // the cut can land on whitespace
    capped.trim_end().to_string()
}

/// The only raw time value that may appear in a prompt.
///
/// Sanitized `localTime`, else sanitized `iso`, else a valid `localHour`
/// formatted as `HH:00`. Empty when nothing is usable.
pub fn display_time(request: &PromptRequest) -> String {
    let sanitized = |value: &Option<String>| {
        value
            .as_deref()
            .map(sanitize_time_text)
            .filter(|s| !s.is_empty())
    };

    sanitized(&request.local_time)
        .or_else(|| sanitized(&request.iso))
        .or_else(|| {
            request
                .local_hour
                .as_ref()
                .and_then(LocalHour::as_integer)
                .and_then(hour_in_range)
                .map(|hour| format!("{hour:02}:00"))
        })
        .unwrap_or_default()
}

/// Hour from clock text such as "23:59", "7:05:10", "2359" or "835"
pub fn clock_hour(text: &str) -> Option<u8> {
    let text = text.trim();

    // a colon form that is out of range is not retried as a compact form
    if let Some(caps) = COLON_CLOCK_RE.captures(text) {
        return caps[1].parse::<u8>().ok().and_then(hour_in_range);
    }

    COMPACT_CLOCK_RE
        .captures(text)
        .and_then(|caps| caps[1].parse::<u8>().ok())
        .and_then(hour_in_range)
}

/// Hour of an ISO-8601-like timestamp.
///
/// Zoned timestamps are converted to `reference` first. Timestamps without a
/// zone are taken as written. A bare date is UTC midnight, read at `reference`.
pub fn iso_hour(raw: &str, reference: FixedOffset) -> Option<u8> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(dt) = parse_zoned(text) {
        return Some(dt.with_timezone(&reference).hour() as u8);
    }

    if let Some(dt) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
    {
        return Some(dt.hour() as u8);
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc().with_timezone(&reference).hour() as u8)
}

fn parse_zoned(text: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = text.parse::<DateTime<FixedOffset>>() {
        return Some(dt);
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt);
    }

    let caps = MINUTE_PRECISION_ZONED_RE.captures(text)?;
    let zone = match (&caps[2], caps.get(3)) {
        ("Z" | "z", None) => "+00:00".to_string(),
        ("Z" | "z", Some(_)) => return None,
        (hours, minutes) => format!(
            "{hours}:{}",
            minutes.map(|m| m.as_str()).unwrap_or("00")
        ),
    };
    format!("{}:00{zone}", &caps[1])
        .parse::<DateTime<FixedOffset>>()
        .ok()
}

fn hour_in_range<T>(value: T) -> Option<u8>
where
    T: TryInto<u8>,
{
    value.try_into().ok().filter(|hour| *hour <= 23)
}
