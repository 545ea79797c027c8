//! Console sink implementation

use crate::core::{LineFormat, LogLine, Result, Sink};
#[cfg(feature = "console")]
use crate::core::{LogLevel, PANIC_LABEL};
#[cfg(feature = "console")]
use colored::Colorize;
use parking_lot::Mutex;
use std::io::{self, Write};

/// Writes lines to standard error, or to any writer handed to
/// [`ConsoleSink::with_writer`].
pub struct ConsoleSink {
    writer: Mutex<Box<dyn Write + Send>>,
    use_colors: bool,
    line_format: LineFormat,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::with_writer(Box::new(io::stderr()))
    }

    /// A stderr sink that colours each line by the level label it starts with.
    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
            use_colors: false,
            line_format: LineFormat::default(),
        }
    }

    /// Set the decoration written before each line
    ///
    /// # Example
    ///
    /// ```
    /// use multi_logger::sinks::ConsoleSink;
    /// use multi_logger::LineFormat;
    ///
    /// let sink = ConsoleSink::new().with_line_format(LineFormat::bare());
    /// ```
    #[must_use]
    pub fn with_line_format(mut self, format: LineFormat) -> Self {
        self.line_format = format;
        self
    }

    #[must_use]
    pub fn colored(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[cfg(feature = "console")]
    fn paint(&self, entry: &LogLine<'_>, output: String) -> String {
        if !self.use_colors {
            return output;
        }
        let color = if entry.line.starts_with(PANIC_LABEL) {
            LogLevel::Fatal.color_code()
        } else {
            match LogLevel::from_line_prefix(entry.line) {
                Some(level) => level.color_code(),
                None => return output,
            }
        };
        let body = output.trim_end_matches('\n');
        format!("{}\n", body.color(color))
    }

    #[cfg(not(feature = "console"))]
    fn paint(&self, _entry: &LogLine<'_>, output: String) -> String {
        output
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn emit(&self, entry: &LogLine<'_>) -> Result<()> {
        let output = self.paint(entry, entry.render(&self.line_format));
        let mut writer = self.writer.lock();
        writer.write_all(output.as_bytes())?;
        Ok(())
    }

    fn close(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
