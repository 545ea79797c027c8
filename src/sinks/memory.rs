//! In-memory sink that records lines instead of writing them

use crate::core::{LogLine, LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// What a [`MemorySink`] kept from one emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedLine {
    pub line: String,
    pub call_depth: usize,
    pub file: String,
    pub line_number: u32,
}

/// Keeps every emitted line in memory.
///
/// Handy for tests and for capturing output of a sub-system. A sink built
/// with [`MemorySink::failing`] rejects every line.
///
/// ```
/// use multi_logger::sinks::MemorySink;
/// use multi_logger::{LogLevel, NamedLogger};
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = NamedLogger::with_sink("app: ", sink.clone(), None);
/// logger.info("started");
/// assert_eq!(sink.lines(), vec!["INFO app: started"]);
/// ```
#[derive(Debug)]
pub struct MemorySink {
    name: String,
    records: Mutex<Vec<RecordedLine>>,
    fail: bool,
    closes: AtomicUsize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::named("memory")
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Mutex::new(Vec::new()),
            fail: false,
            closes: AtomicUsize::new(0),
        }
    }

    pub fn failing(name: impl Into<String>) -> Self {
        Self {
            fail: true,
            ..Self::named(name)
        }
    }

    pub fn records(&self) -> Vec<RecordedLine> {
        self.records.lock().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|record| record.line.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// How many times [`Sink::close`] was called.
    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for MemorySink {
    fn emit(&self, line: &LogLine<'_>) -> Result<()> {
        if self.fail {
            return Err(LoggerError::io_operation(
                "recording line",
                std::io::Error::other("memory sink configured to fail"),
            ));
        }
        self.records.lock().push(RecordedLine {
            line: line.line.to_string(),
            call_depth: line.call_depth,
            file: line.short_file().to_string(),
            line_number: line.line_number,
        });
        Ok(())
    }

    fn close(&self) -> Result<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
