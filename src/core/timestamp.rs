//! Timestamp and line-decoration options for writer sinks
//!
//! Writer sinks may put a timestamp and the caller's `file:line` in front
//! of every rendered line. Both are off for in-memory sinks and on by
//! default (timestamp only) for console and file output.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Standardized timestamp format options
///
/// # Examples
///
/// ```
/// use multi_logger::core::TimestampFormat;
/// use chrono::{Local, TimeZone};
///
/// let at = Local.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::Std.format(&at), "2025/01/08 10:30:45");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Local date and time: `2025/01/08 10:30:45`
    #[default]
    Std,

    /// Local date and time with microseconds: `2025/01/08 10:30:45.123456`
    StdMicros,

    /// ISO 8601 in UTC with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// RFC 3339 with the local offset: `2025-01-08T10:30:45+01:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format, applied to local time
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::Std => datetime.format("%Y/%m/%d %H:%M:%S").to_string(),
            TimestampFormat::StdMicros => datetime.format("%Y/%m/%d %H:%M:%S%.6f").to_string(),
            TimestampFormat::Iso8601 => datetime
                .with_timezone(&Utc)
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}

/// What a writer sink puts in front of each line.
///
/// # Examples
///
/// ```
/// use multi_logger::core::{LineFormat, TimestampFormat};
///
/// let format = LineFormat::new()
///     .with_timestamp(Some(TimestampFormat::Iso8601))
///     .with_location(true);
/// assert!(format.location);
///
/// assert_eq!(LineFormat::bare().timestamp, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LineFormat {
    /// Timestamp written before the line, if any
    pub timestamp: Option<TimestampFormat>,
    /// Whether to write the caller's `file:line: ` before the line
    pub location: bool,
}

impl Default for LineFormat {
    fn default() -> Self {
        Self {
            timestamp: Some(TimestampFormat::Std),
            location: false,
        }
    }
}

impl LineFormat {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// No timestamp and no location: the rendered line verbatim.
    #[must_use]
    pub fn bare() -> Self {
        Self {
            timestamp: None,
            location: false,
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: Option<TimestampFormat>) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: bool) -> Self {
        self.location = location;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_std_format() {
        assert_eq!(TimestampFormat::Std.format(&fixed_datetime()), "2025/01/08 10:30:45");
        assert_eq!(
            TimestampFormat::StdMicros.format(&fixed_datetime()),
            "2025/01/08 10:30:45.123456"
        );
    }

    #[test]
    fn test_iso8601_format_is_utc() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime());
        assert!(result.ends_with(".123Z"));
        assert!(result.contains('T'));
    }

    #[test]
    fn test_unix_millis_format() {
        let result = TimestampFormat::UnixMillis.format(&fixed_datetime());
        let parsed: i64 = result.parse().expect("valid unix millis timestamp");
        assert_eq!(parsed % 1000, 123);
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y-%m-%d".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2025-01-08");
    }

    #[test]
    fn test_line_format_defaults() {
        let format = LineFormat::default();
        assert_eq!(format.timestamp, Some(TimestampFormat::Std));
        assert!(!format.location);
    }

    #[test]
    fn test_line_format_deserialization() {
        let format: LineFormat =
            serde_json::from_str(r#"{"Timestamp":null,"Location":true}"#).expect("deserialize");
        assert_eq!(format, LineFormat::bare().with_location(true));

        let format: LineFormat = serde_json::from_str("{}").expect("deserialize empty");
        assert_eq!(format, LineFormat::default());
    }
}
