//! Turns a [`Config`] into sinks and loggers
//!
//! The builder opens its sinks once and hands them to every logger it makes,
//! so loggers built from the same builder write to the same console and file.
//!
//! For each level the builder picks:
//!
//! | console qualifies | file qualifies | sink        |
//! |-------------------|----------------|-------------|
//! | yes               | yes            | fan-out     |
//! | yes               | no             | console     |
//! | no                | yes            | file        |
//! | no                | no             | none        |
//!
//! A level qualifies for an output when the output is enabled and the level
//! is at or above the output's threshold.

use super::{
    config::Config,
    log_level::LogLevel,
    logger::NamedLogger,
    sink::SharedSink,
};
use crate::sinks::{ConsoleSink, FanOutSink, RotatingFileSink, RotationPolicy};
use std::sync::Arc;

pub struct Builder {
    console: Option<SharedSink>,
    console_level: LogLevel,
    file: Option<SharedSink>,
    file_level: LogLevel,
}

impl Builder {
    /// Open the outputs `config` enables.
    ///
    /// A log file that cannot be opened is reported on standard error and
    /// left out; the console output is unaffected.
    pub fn new(config: &Config) -> Self {
        let console = config.enable_console.then(|| {
            let sink = ConsoleSink::with_colors(config.console_ansi_color)
                .with_line_format(config.line_format.clone());
            Arc::new(sink) as SharedSink
        });

        let file = if config.enable_file {
            Self::open_file(config)
        } else {
            None
        };

        Self {
            console,
            console_level: config.console_level,
            file,
            file_level: config.file_level,
        }
    }

    fn open_file(config: &Config) -> Option<SharedSink> {
        let max_bytes = match config.file_limit_bytes() {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("[LOGGER WARN] {}; file rotation disabled", e);
                0
            }
        };
        let policy = RotationPolicy::new()
            .with_max_size(max_bytes)
            .with_max_backups(config.file_backup_count);

        let path = config.resolved_file_location();
        match RotatingFileSink::open(&path, policy) {
            Ok(sink) => Some(Arc::new(sink.with_line_format(config.line_format.clone()))),
            Err(e) => {
                eprintln!("[LOGGER ERROR] {}", e);
                None
            }
        }
    }

    /// Replace the console output, e.g. to capture it in tests.
    ///
    /// `None` disables the console for every level.
    #[must_use]
    pub fn with_console_sink(mut self, sink: Option<SharedSink>) -> Self {
        self.console = sink;
        self
    }

    /// Replace the file output. `None` disables it.
    #[must_use]
    pub fn with_file_sink(mut self, sink: Option<SharedSink>) -> Self {
        self.file = sink;
        self
    }

    pub fn console_sink(&self) -> Option<&SharedSink> {
        self.console.as_ref()
    }

    pub fn file_sink(&self) -> Option<&SharedSink> {
        self.file.as_ref()
    }

    /// The sink `level` is routed to, if any.
    pub fn level_sink(&self, level: LogLevel) -> Option<SharedSink> {
        let console = self
            .console
            .as_ref()
            .filter(|_| level >= self.console_level);
        let file = self.file.as_ref().filter(|_| level >= self.file_level);

        match (console, file) {
            (Some(console), Some(file)) => Some(Arc::new(FanOutSink::new(vec![
                Arc::clone(console),
                Arc::clone(file),
            ]))),
            (Some(sink), None) | (None, Some(sink)) => Some(Arc::clone(sink)),
            (None, None) => None,
        }
    }

    /// A logger named `name` with every qualifying level routed.
    ///
    /// The file output, when present, becomes the logger's closer.
    pub fn logger(&self, name: impl Into<String>) -> NamedLogger {
        let logger = NamedLogger::omitting(name);
        for level in LogLevel::ALL {
            if let Some(sink) = self.level_sink(level) {
                logger.set_output(level, sink);
            }
        }
        logger.set_closer(self.file.clone());
        logger
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
