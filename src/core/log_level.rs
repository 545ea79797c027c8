//! Log level definitions

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Line prefix of the panic pseudo-severity. Never used as a routing key.
pub const PANIC_LABEL: &str = "PANIC ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl LogLevel {
    /// Every level in ascending rank order.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// The prefix written in front of every rendered line of this level.
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRAC ",
            LogLevel::Debug => "DEBG ",
            LogLevel::Info => "INFO ",
            LogLevel::Warn => "WARN ",
            LogLevel::Error => "ERROR ",
            LogLevel::Fatal => "FATAL ",
        }
    }

    #[inline]
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Recover the level from a rendered line that starts with a label.
    pub fn from_line_prefix(line: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| line.starts_with(level.label()))
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Trace => BrightBlack,
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warn => Yellow,
            LogLevel::Error => Red,
            LogLevel::Fatal => BrightRed,
        }
    }
}

/// Parse a level name leniently.
///
/// Matching is case-insensitive and ignores surrounding spaces, `\r` and
/// `\n`. Canonical labels (`"WARN"`), full names (`"warning"`) and short
/// aliases (`"err"`) are accepted. Anything unrecognised is `Info`; this
/// function never fails.
///
/// ```
/// use multi_logger::{parse_level, LogLevel};
///
/// assert_eq!(parse_level("WARNING"), LogLevel::Warn);
/// assert_eq!(parse_level(" Debug \n"), LogLevel::Debug);
/// assert_eq!(parse_level("bogus"), LogLevel::Info);
/// ```
pub fn parse_level(s: &str) -> LogLevel {
    let trimmed = s.trim_matches(|c| c == ' ' || c == '\r' || c == '\n');
    match trimmed.to_lowercase().as_str() {
        "trace" | "trac" => LogLevel::Trace,
        "debug" | "debg" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "err" | "error" => LogLevel::Error,
        "fatal" => LogLevel::Fatal,
        _ => LogLevel::Info,
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_level(s))
    }
}

impl From<String> for LogLevel {
    fn from(s: String) -> Self {
        parse_level(&s)
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.to_str().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_info() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(parse_level("trace"), LogLevel::Trace);
        assert_eq!(parse_level("TRAC "), LogLevel::Trace);
        assert_eq!(parse_level("DEBG "), LogLevel::Debug);
        assert_eq!(parse_level("warning"), LogLevel::Warn);
        assert_eq!(parse_level("Err"), LogLevel::Error);
        assert_eq!(parse_level("ERROR "), LogLevel::Error);
        assert_eq!(parse_level("fatal\r\n"), LogLevel::Fatal);
    }

    #[test]
    fn test_parse_unknown_defaults_to_info() {
        assert_eq!(parse_level(""), LogLevel::Info);
        assert_eq!(parse_level("verbose"), LogLevel::Info);
        assert_eq!(parse_level("panic"), LogLevel::Info);
        assert_eq!("nonsense".parse::<LogLevel>(), Ok(LogLevel::Info));
    }

    #[test]
    fn test_labels_round_trip_through_prefix() {
        for level in LogLevel::ALL {
            let line = format!("{}main: hello", level.label());
            assert_eq!(LogLevel::from_line_prefix(&line), Some(level));
            assert_eq!(parse_level(level.label()), level);
        }
        assert_eq!(LogLevel::from_line_prefix("PANIC boom"), None);
    }

    #[test]
    fn test_ordering_and_rank() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Error < LogLevel::Fatal);
        let ranks: Vec<u8> = LogLevel::ALL.iter().map(LogLevel::rank).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_serde_is_lenient() {
        let level: LogLevel = serde_json::from_str("\"Warning\"").unwrap();
        assert_eq!(level, LogLevel::Warn);

        let level: LogLevel = serde_json::from_str("\"loud\"").unwrap();
        assert_eq!(level, LogLevel::Info);

        assert_eq!(serde_json::to_string(&LogLevel::Error).unwrap(), "\"error\"");
    }
}
