//! Adapters for code that logs through other interfaces
//!
//! - [`LevelWriter`] is an [`io::Write`] that turns every written line into a
//!   log line at one level. Hand it to code that only knows how to write text.
//! - `NamedLogger` implements [`log::Log`], so crates using the `log` macros
//!   can be routed through a logger with [`init_log_bridge`].

use super::{
    builder::Builder,
    error::{LoggerError, Result},
    global::global,
    log_level::LogLevel,
    logger::NamedLogger,
    routing::BASE_CALL_DEPTH,
    log_line::LogLine,
    message::render_line,
    sink::SharedSink,
};
use std::io::{self, Write};
use std::panic::Location;

/// Writes each line it receives through one sink, prefixed with
/// `<LABEL><name>`.
///
/// The sink is looked up once, when the writer is made. A writer made for an
/// unrouted level discards everything.
///
/// ```
/// use multi_logger::sinks::MemorySink;
/// use multi_logger::{LogLevel, NamedLogger};
/// use std::io::Write;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = NamedLogger::with_sink("app: ", sink.clone(), None);
///
/// let mut writer = logger.std_log_at(LogLevel::Warn, "[http] ");
/// writeln!(writer, "slow request").unwrap();
/// assert_eq!(sink.lines(), vec!["WARN [http] slow request\n"]);
/// ```
pub struct LevelWriter {
    sink: Option<SharedSink>,
    prefix: String,
    pending: Vec<u8>,
    location: &'static Location<'static>,
}

impl LevelWriter {
    fn new(
        sink: Option<SharedSink>,
        level: LogLevel,
        name: &str,
        location: &'static Location<'static>,
    ) -> Self {
        Self {
            sink,
            prefix: format!("{}{}", level.label(), name),
            pending: Vec::new(),
            location,
        }
    }

    /// True when written text goes nowhere.
    pub fn is_discarding(&self) -> bool {
        self.sink.is_none()
    }

    fn emit_line(&self, sink: &SharedSink, text: &[u8]) -> io::Result<()> {
        let line = format!("{}{}", self.prefix, String::from_utf8_lossy(text));
        sink.emit(&LogLine::at(&line, BASE_CALL_DEPTH, self.location))
            .map_err(io::Error::other)
    }
}

impl Write for LevelWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let Some(sink) = self.sink.clone() else {
            return Ok(buf.len());
        };

        self.pending.extend_from_slice(buf);
        while let Some(end) = self.pending.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=end).collect();
            self.emit_line(&sink, &line)?;
        }
        Ok(buf.len())
    }

    /// Emits a trailing partial line, if any.
    fn flush(&mut self) -> io::Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let line = std::mem::take(&mut self.pending);
        match self.sink.clone() {
            Some(sink) => self.emit_line(&sink, &line),
            None => Ok(()),
        }
    }
}

impl Drop for LevelWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

impl NamedLogger {
    /// A writer logging each line at `level` with prefix `name`.
    #[track_caller]
    pub fn std_log_at(&self, level: LogLevel, name: &str) -> LevelWriter {
        LevelWriter::new(self.get(level), level, name, Location::caller())
    }

    /// [`NamedLogger::std_log_at`] at debug level.
    #[track_caller]
    pub fn std_log(&self, name: &str) -> LevelWriter {
        self.std_log_at(LogLevel::Debug, name)
    }
}

impl Builder {
    /// A writer over the sink this builder routes `level` to.
    #[track_caller]
    pub fn std_log_at(&self, level: LogLevel, name: &str) -> LevelWriter {
        LevelWriter::new(self.level_sink(level), level, name, Location::caller())
    }

    /// [`Builder::std_log_at`] at debug level.
    #[track_caller]
    pub fn std_log(&self, name: &str) -> LevelWriter {
        self.std_log_at(LogLevel::Debug, name)
    }
}

/// A debug-level writer over the global logger's routing.
#[track_caller]
pub fn new_std_log(name: &str) -> LevelWriter {
    global().std_log(name)
}

/// A writer at `level` over the global logger's routing.
#[track_caller]
pub fn new_std_log_at(level: LogLevel, name: &str) -> LevelWriter {
    global().std_log_at(level, name)
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogLevel::Error,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Info => LogLevel::Info,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Trace => LogLevel::Trace,
        }
    }
}

impl log::Log for NamedLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.table().is_routed(metadata.level().into())
    }

    /// Routes the record with the file and line the `log` macros captured.
    /// Records without them are attributed to this bridge.
    fn log(&self, record: &log::Record<'_>) {
        let level: LogLevel = record.level().into();
        let Some(sink) = self.get(level) else {
            return;
        };
        let line = render_line(level.label(), self.name(), *record.args());
        let entry = match (record.file(), record.line()) {
            (Some(file), Some(number)) => LogLine::from_source(&line, BASE_CALL_DEPTH, file, number),
            _ => LogLine::at(&line, BASE_CALL_DEPTH, Location::caller()),
        };
        let _ = sink.emit(&entry);
    }

    fn flush(&self) {}
}

/// Install `logger` as the `log` crate's backend.
///
/// # Errors
///
/// Fails if another `log` backend is already installed.
pub fn init_log_bridge(logger: NamedLogger, max_level: log::LevelFilter) -> Result<()> {
    log::set_boxed_logger(Box::new(logger))
        .map_err(|e| LoggerError::config("log bridge", e.to_string()))?;
    log::set_max_level(max_level);
    Ok(())
}
