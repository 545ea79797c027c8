//! Logger configuration
//!
//! [`Config`] carries the options the [`Builder`](crate::Builder) turns into
//! sinks. It deserializes from JSON with PascalCase keys, and every key is
//! optional:
//!
//! ```
//! use multi_logger::{Config, LogLevel};
//!
//! let config = Config::from_json_str(r#"{
//!     "ConsoleLevel": "warning",
//!     "EnableFile": true,
//!     "FileLocation": "logs/app.log",
//!     "FileLimitSize": "1024k"
//! }"#).unwrap();
//!
//! assert!(config.enable_console);
//! assert_eq!(config.console_level, LogLevel::Warn);
//! assert_eq!(config.file_limit_bytes().unwrap(), 1024 * 1024);
//! assert_eq!(config.file_backup_count, 7);
//! ```

use super::{
    error::{LoggerError, Result},
    log_level::LogLevel,
    logger::NamedLogger,
    timestamp::LineFormat,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Config {
    pub enable_console: bool,
    /// Lowest level written to the console
    pub console_level: LogLevel,
    pub console_ansi_color: bool,

    pub enable_file: bool,
    /// Lowest level written to the file
    pub file_level: LogLevel,
    /// Log file path; empty means the program path with a `.log` extension
    pub file_location: String,
    /// Byte limit before rotation, with an optional K/M/G suffix
    pub file_limit_size: String,
    pub file_backup_count: usize,

    /// Decoration of console and file lines
    pub line_format: LineFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_console: true,
            console_level: LogLevel::Debug,
            console_ansi_color: false,
            enable_file: false,
            file_level: LogLevel::Info,
            file_location: String::new(),
            file_limit_size: "10M".to_string(),
            file_backup_count: 7,
            line_format: LineFormat::default(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document; missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_console(mut self, enabled: bool, level: LogLevel) -> Self {
        self.enable_console = enabled;
        self.console_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_ansi_color(mut self, enabled: bool) -> Self {
        self.console_ansi_color = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_file(mut self, enabled: bool, level: LogLevel) -> Self {
        self.enable_file = enabled;
        self.file_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_file_location(mut self, location: impl Into<String>) -> Self {
        self.file_location = location.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_file_rotation(mut self, limit_size: impl Into<String>, backup_count: usize) -> Self {
        self.file_limit_size = limit_size.into();
        self.file_backup_count = backup_count;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_line_format(mut self, format: LineFormat) -> Self {
        self.line_format = format;
        self
    }

    /// The file path to open, falling back to the program path with its
    /// extension replaced by `log`.
    pub fn resolved_file_location(&self) -> PathBuf {
        if !self.file_location.is_empty() {
            return PathBuf::from(&self.file_location);
        }
        let program = std::env::args_os()
            .next()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("app"));
        program.with_extension("log")
    }

    pub fn file_limit_bytes(&self) -> Result<u64> {
        parse_size(&self.file_limit_size)
    }

    /// Build the sinks described by this config and a logger over them.
    pub fn make_logger(&self, name: impl Into<String>) -> NamedLogger {
        super::builder::Builder::new(self).logger(name)
    }
}

/// Parse a byte count with an optional `K`, `M` or `G` suffix (base 1024,
/// case-insensitive). `0x`, `0o` and `0b` prefixes select the radix.
///
/// ```
/// use multi_logger::parse_size;
///
/// assert_eq!(parse_size("10M").unwrap(), 10 * 1024 * 1024);
/// assert_eq!(parse_size("512").unwrap(), 512);
/// assert_eq!(parse_size("0x10k").unwrap(), 16 * 1024);
/// assert!(parse_size("ten").is_err());
/// ```
pub fn parse_size(input: &str) -> Result<u64> {
    const BASE: u64 = 1024;

    let s = input.trim();
    let (digits, multiplier) = match s.char_indices().last() {
        Some((idx, suffix)) if s.len() > 1 => match suffix {
            'k' | 'K' => (&s[..idx], BASE),
            'm' | 'M' => (&s[..idx], BASE * BASE),
            'g' | 'G' => (&s[..idx], BASE * BASE * BASE),
            _ => (s, 1),
        },
        _ => (s, 1),
    };

    let lower = digits.to_ascii_lowercase();
    let (radix, body) = if let Some(rest) = lower.strip_prefix("0x") {
        (16, rest)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (8, rest)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, rest)
    } else {
        (10, lower.as_str())
    };

    let value = u64::from_str_radix(body, radix)
        .map_err(|e| LoggerError::invalid_size(input, e.to_string()))?;
    value
        .checked_mul(multiplier)
        .ok_or_else(|| LoggerError::invalid_size(input, "size overflows u64"))
}
