//! Conversion between timestamps and their text form in a document.

use crate::config::TimeFormat;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use std::fmt::Write;

const NAIVE_DATE_TIME: &str = "%Y-%m-%dT%H:%M:%S%.f";
const DATE: &str = "%Y-%m-%d";

/// Formats `value` for storage.
///
/// Fails only for a custom pattern chrono cannot render.
pub fn format_time(value: &DateTime<Utc>, format: &TimeFormat) -> Result<String, std::fmt::Error> {
    match format {
        TimeFormat::Rfc3339 => Ok(value.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        TimeFormat::Custom(pattern) => {
            let mut text = String::new();
            write!(text, "{}", value.format(pattern))?;
            Ok(text)
        }
    }
}

/// Parses stored text into a UTC timestamp.
///
/// Values without an offset are taken as UTC; a bare date is midnight.
pub fn parse_time(text: &str, format: &TimeFormat) -> Option<DateTime<Utc>> {
    let text = text.trim();
    match format {
        TimeFormat::Rfc3339 => DateTime::parse_from_rfc3339(text)
            .map(|value| value.with_timezone(&Utc))
            .ok()
            .or_else(|| parse_naive(text, NAIVE_DATE_TIME, DATE)),
        TimeFormat::Custom(pattern) => DateTime::parse_from_str(text, pattern)
            .map(|value| value.with_timezone(&Utc))
            .ok()
            .or_else(|| parse_naive(text, pattern, pattern)),
    }
}

fn parse_naive(text: &str, date_time_pattern: &str, date_pattern: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(text, date_time_pattern)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, date_pattern)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|value| value.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 15).unwrap()
    }

    #[test]
    fn test_rfc3339_format() {
        assert_eq!(
            format_time(&sample(), &TimeFormat::Rfc3339).unwrap(),
            "2024-05-01T12:30:15Z"
        );
    }

    #[test]
    fn test_rfc3339_parse_variants() {
        let format = TimeFormat::Rfc3339;
        assert_eq!(parse_time("2024-05-01T12:30:15Z", &format), Some(sample()));
        assert_eq!(parse_time("2024-05-01T14:30:15+02:00", &format), Some(sample()));
        assert_eq!(parse_time(" 2024-05-01T12:30:15 ", &format), Some(sample()));
        assert_eq!(
            parse_time("2024-05-01", &format),
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_time("yesterday", &format), None);
        assert_eq!(parse_time("", &format), None);
    }

    #[test]
    fn test_custom_pattern_round_trip() {
        let format = TimeFormat::Custom("%d.%m.%Y %H:%M:%S".to_string());
        let text = format_time(&sample(), &format).unwrap();
        assert_eq!(text, "01.05.2024 12:30:15");
        assert_eq!(parse_time(&text, &format), Some(sample()));
    }

    #[test]
    fn test_custom_date_only_pattern() {
        let format = TimeFormat::Custom("%d/%m/%Y".to_string());
        assert_eq!(
            parse_time("01/05/2024", &format),
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_invalid_custom_pattern_fails_to_format() {
        let format = TimeFormat::Custom("%Q".to_string());
        assert!(format_time(&sample(), &format).is_err());
    }
}
