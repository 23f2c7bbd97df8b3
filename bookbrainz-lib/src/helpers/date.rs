use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::DateError;

const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A date with optional month and day, as stored for entity begin/end dates.
///
/// The stored form is ISO 8601 with an explicit sign and a zero-padded year:
/// `+1935-07-30`, `+1935-07`, `+1935`, `-0300` (300 BC). An unsigned year is
/// accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialDate {
    /// Before the common era.
    pub bce: bool,
    pub year: u32,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl FromStr for PartialDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DateError::partial_date(s);

        let (bce, rest) = match s.as_bytes().first() {
            Some(b'+') => (false, &s[1..]),
            Some(b'-') => (true, &s[1..]),
            _ => (false, s),
        };

        let mut parts = rest.split('-');
        let year = parts
            .next()
            .filter(|part| is_digits(part))
            .and_then(|part| part.parse::<u32>().ok())
            .ok_or_else(invalid)?;
        let month = match parts.next() {
            Some(part) => Some(parse_component(part, 12).ok_or_else(invalid)?),
            None => None,
        };
        let day = match parts.next() {
            Some(part) => Some(parse_component(part, 31).ok_or_else(invalid)?),
            None => None,
        };
        if parts.next().is_some() {
            return Err(invalid());
        }

        if let (Some(month), Some(day)) = (month, day) {
            let signed_year = i32::try_from(year).map_err(|_| invalid())?;
            let signed_year = if bce { -signed_year } else { signed_year };
            NaiveDate::from_ymd_opt(signed_year, month, day).ok_or_else(invalid)?;
        }

        Ok(Self {
            bce,
            year,
            month,
            day,
        })
    }
}

impl fmt::Display for PartialDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.year)?;
        if let Some(month) = self.month {
            write!(f, "-{month:02}")?;
        }
        if let Some(day) = self.day {
            write!(f, "-{day:02}")?;
        }
        if self.bce {
            write!(f, " BC")?;
        }
        Ok(())
    }
}

fn is_digits(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

fn parse_component(part: &str, max: u32) -> Option<u32> {
    if part.len() != 2 || !is_digits(part) {
        return None;
    }
    part.parse().ok().filter(|value| (1..=max).contains(value))
}

/// Human-readable form of a stored partial date.
///
/// The sign is dropped (BCE dates get a ` BC` suffix) and the year loses its
/// zero padding. Values that are not partial dates, including the `?`
/// placeholder, are returned unchanged.
pub fn transform_iso_date_for_display(value: &str) -> String {
    match value.parse::<PartialDate>() {
        Ok(date) => date.to_string(),
        Err(_) => value.to_string(),
    }
}

/// Parse a timestamp: RFC 3339, or naive ISO 8601 taken as UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, DateError> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_TIMESTAMP_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|parsed| parsed.and_utc())
        .ok_or_else(|| DateError::timestamp(value))
}

/// Format a timestamp as `YYYY-MM-DD`, with ` HH:MM:SS` (UTC) when
/// `include_time` is set.
pub fn format_date(date: &DateTime<Utc>, include_time: bool) -> String {
    if include_time {
        date.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        date.format("%Y-%m-%d").to_string()
    }
}
