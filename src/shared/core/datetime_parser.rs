// Parser port for raw appointment strings.
//
// Purpose
// - Keep the booking rules agnostic of how a client spelled the date and time.
//
// Boundaries
// - Result is a naive wall-clock value. Offsets are dropped, never converted.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognised datetime: {input:?}")]
pub struct DateTimeParseError {
    pub input: String,
}

pub trait DateTimeParser: Send + Sync {
    fn parse(&self, raw: &str) -> Result<NaiveDateTime, DateTimeParseError>;
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%d %I:%M %p",
    "%B %d, %Y %H:%M",
    "%d %B %Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Accepts the common ISO-8601 spellings plus a few human ones.
#[derive(Debug, Default, Clone, Copy)]
pub struct LenientDateTimeParser;

impl LenientDateTimeParser {
    pub fn new() -> Self {
        Self
    }
}

impl DateTimeParser for LenientDateTimeParser {
    fn parse(&self, raw: &str) -> Result<NaiveDateTime, DateTimeParseError> {
        let input = raw.trim();

        if let Ok(with_offset) = DateTime::parse_from_rfc3339(input) {
            return Ok(with_offset.naive_local());
        }

        let datetime = DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok());
        if let Some(datetime) = datetime {
            return Ok(datetime);
        }

        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or_else(|| DateTimeParseError {
                input: raw.to_string(),
            })
    }
}
