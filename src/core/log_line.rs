//! The record a sink receives for every emitted line

use super::timestamp::LineFormat;
use chrono::{DateTime, Local};
use std::panic::Location;
use std::path::Path;

/// One rendered log line on its way to a sink.
///
/// `line` is already `<LABEL><name><message>`; sinks only decorate it.
/// The timestamp is captured once, so fan-out targets agree on it.
#[derive(Debug, Clone, Copy)]
pub struct LogLine<'a> {
    pub line: &'a str,
    /// Frames between the sink and the application call site.
    pub call_depth: usize,
    /// Source file of the call site, usually tracked through
    /// `#[track_caller]`.
    pub file: &'a str,
    pub line_number: u32,
    pub timestamp: DateTime<Local>,
}

impl<'a> LogLine<'a> {
    #[track_caller]
    pub fn new(line: &'a str, call_depth: usize) -> Self {
        Self::at(line, call_depth, Location::caller())
    }

    pub fn at(line: &'a str, call_depth: usize, location: &'static Location<'static>) -> Self {
        Self::from_source(line, call_depth, location.file(), location.line())
    }

    /// A line whose call site was recorded elsewhere, e.g. by a `log` record.
    pub fn from_source(line: &'a str, call_depth: usize, file: &'a str, line_number: u32) -> Self {
        Self {
            line,
            call_depth,
            file,
            line_number,
            timestamp: Local::now(),
        }
    }

    /// Base name of the caller's source file, e.g. `main.rs`.
    pub fn short_file(&self) -> &'a str {
        let file = self.file;
        Path::new(file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(file)
    }

    /// Decorate the line for a text destination.
    ///
    /// A trailing newline is appended only when the line lacks one.
    pub fn render(&self, format: &LineFormat) -> String {
        let mut output = String::with_capacity(self.line.len() + 48);

        if let Some(ref timestamp_format) = format.timestamp {
            output.push_str(&timestamp_format.format(&self.timestamp));
            output.push(' ');
        }

        if format.location {
            output.push_str(self.short_file());
            output.push(':');
            output.push_str(&self.line_number.to_string());
            output.push_str(": ");
        }

        output.push_str(self.line);
        if !self.line.ends_with('\n') {
            output.push('\n');
        }
        output
    }
}
