//! Parsing and serializing local civil timestamps.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Timelike};

use crate::error::{CalGridError, CalGridResult};

/// Canonical text form used in the events file.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Used instead of `TIMESTAMP_FORMAT` when the value has sub-millisecond
/// precision, so that reading the text back gives the same timestamp.
const PRECISE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Naive formats accepted on input, tried in order.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a timestamp from user or file input.
///
/// Offset-carrying RFC 3339 text (what browsers write, e.g. `...Z`) is
/// converted to local civil time. A bare date means midnight.
pub fn parse_timestamp(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse YYYY-MM-DD
pub fn parse_date(input: &str) -> CalGridResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| CalGridError::InvalidDate(input.to_string()))
}

pub fn format_timestamp(dt: &NaiveDateTime) -> String {
    if dt.nanosecond() % 1_000_000 == 0 {
        dt.format(TIMESTAMP_FORMAT).to_string()
    } else {
        dt.format(PRECISE_TIMESTAMP_FORMAT).to_string()
    }
}

/// A date field as typed into a form: either a real timestamp or the raw
/// text that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    Parsed(NaiveDateTime),
    Unparsed(String),
}

impl DateInput {
    pub fn parse(input: &str) -> Self {
        match parse_timestamp(input) {
            Some(dt) => DateInput::Parsed(dt),
            None => DateInput::Unparsed(input.to_string()),
        }
    }

    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            DateInput::Parsed(dt) => Some(*dt),
            DateInput::Unparsed(_) => None,
        }
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(dt: NaiveDateTime) -> Self {
        DateInput::Parsed(dt)
    }
}

/// Serde adapter storing timestamps as `TIMESTAMP_FORMAT` text.
pub(crate) mod serde_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_timestamp(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_timestamp(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_naive_formats() {
        let expected = at(2024, 1, 15, 9, 30);
        assert_eq!(parse_timestamp("2024-01-15T09:30"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-15T09:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-15T09:30:00.000"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-15 09:30"), Some(expected));
        assert_eq!(parse_timestamp(" 2024-01-15 09:30:00 "), Some(expected));
    }

    #[test]
    fn test_parse_bare_date_is_midnight() {
        assert_eq!(parse_timestamp("2024-03-01"), Some(at(2024, 3, 1, 0, 0)));
    }

    #[test]
    fn test_parse_rfc3339_converts_to_local() {
        let expected = Utc
            .with_ymd_and_hms(2024, 1, 15, 9, 0, 0)
            .unwrap()
            .with_timezone(&Local)
            .naive_local();
        assert_eq!(parse_timestamp("2024-01-15T09:00:00.000Z"), Some(expected));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_timestamp("next tuesday"), None);
        assert_eq!(parse_timestamp("2024-02-30T10:00"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn test_date_input_keeps_unparsed_text() {
        assert_eq!(
            DateInput::parse("soon"),
            DateInput::Unparsed("soon".to_string())
        );
        assert_eq!(
            DateInput::parse("2024-01-15T09:30").as_datetime(),
            Some(at(2024, 1, 15, 9, 30))
        );
    }

    #[test]
    fn test_parse_date_error() {
        assert!(parse_date("2024-13-01").is_err());
        assert_eq!(
            parse_date("2024-12-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()
        );
    }

    #[test]
    fn test_format_timestamp_has_millis() {
        assert_eq!(format_timestamp(&at(2024, 1, 5, 7, 3)), "2024-01-05T07:03:00.000");
    }

    #[test]
    fn test_format_timestamp_keeps_sub_millis() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let micros = day.and_hms_micro_opt(9, 0, 0, 123_456).unwrap();
        let nanos = day.and_hms_nano_opt(9, 0, 0, 123_456_789).unwrap();

        assert_eq!(format_timestamp(&micros), "2024-01-15T09:00:00.123456");
        assert_eq!(format_timestamp(&nanos), "2024-01-15T09:00:00.123456789");
        assert_eq!(parse_timestamp(&format_timestamp(&nanos)), Some(nanos));
    }
}
