//! Serde helper functions for the persisted event format.
//!
//! Stored payloads may come from older writers, so the date readers here
//! detect the format instead of insisting on one.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serializer};

/// Format used when writing event dates.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Format used when writing wall-clock times.
pub const TIME_FORMAT: &str = "%H:%M";

/// Parses a stored date into local wall-clock time.
///
/// Accepts, in order:
/// - RFC 3339 with an offset or `Z` (converted to local time)
/// - naive date-times, `T` or space separated, with optional fraction
/// - bare `YYYY-MM-DD` (midnight)
pub fn parse_local_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Parses a wall-clock time. Accepts formats: HH:MM or HH:MM:SS
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}

/// Serialize a date-time using [`DATETIME_FORMAT`].
pub fn serialize_datetime<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(DATETIME_FORMAT))
}

/// Deserialize a date-time, detecting the stored format.
pub fn deserialize_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_local_datetime(&s)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized date: {s}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(
            serialize_with = "serialize_datetime",
            deserialize_with = "deserialize_datetime"
        )]
        date: NaiveDateTime,
    }

    fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    #[test]
    fn test_parse_date_only() {
        assert_eq!(parse_local_datetime("2024-06-01"), Some(midnight(2024, 6, 1)));
    }

    #[test]
    fn test_parse_naive_datetime_with_fraction() {
        let parsed = parse_local_datetime("2024-06-01T14:30:00.000").unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_parse_naive_datetime_space_separated() {
        let parsed = parse_local_datetime("2024-06-01 08:15").unwrap();
        assert_eq!(parsed.time(), NaiveTime::from_hms_opt(8, 15, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_matches_local_conversion() {
        let s = "2024-06-01T12:00:00.000Z";
        let expected = DateTime::parse_from_rfc3339(s)
            .unwrap()
            .with_timezone(&Local)
            .naive_local();
        assert_eq!(parse_local_datetime(s), Some(expected));
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_local_datetime(""), None);
        assert_eq!(parse_local_datetime("tomorrow"), None);
        assert_eq!(parse_local_datetime("2024-13-01"), None);
    }

    #[test]
    fn test_parse_time_formats() {
        assert_eq!(parse_time("09:30"), NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(parse_time("14:30:45"), NaiveTime::from_hms_opt(14, 30, 45));
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("noon"), None);
    }

    #[test]
    fn test_serialize_writes_fixed_format() {
        let value = TestStruct {
            date: midnight(2024, 6, 1),
        };
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"date":"2024-06-01T00:00:00.000"}"#);
    }

    #[test]
    fn test_time_format_writes_hours_and_minutes() {
        let time = NaiveTime::from_hms_opt(9, 5, 30).unwrap();
        assert_eq!(time.format(TIME_FORMAT).to_string(), "09:05");
    }

    #[test]
    fn test_deserialize_datetime_invalid() {
        let json = r#"{"date": "not-a-date"}"#;
        let result: Result<TestStruct, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
