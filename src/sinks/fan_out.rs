//! Fan-out sink duplicating every line to several targets

use crate::core::{LogLine, LoggerError, Result, SharedSink, Sink};

/// Sends each line to every target.
///
/// Delivery is best effort: a failing target does not stop the others, and
/// the emit only fails when every target failed.
pub struct FanOutSink {
    targets: Vec<SharedSink>,
}

impl FanOutSink {
    pub fn new(targets: Vec<SharedSink>) -> Self {
        Self { targets }
    }

    pub fn targets(&self) -> &[SharedSink] {
        &self.targets
    }

    fn collect_failures<F>(&self, mut op: F) -> Vec<String>
    where
        F: FnMut(&SharedSink) -> Result<()>,
    {
        self.targets
            .iter()
            .filter_map(|target| {
                op(target)
                    .err()
                    .map(|e| format!("{}: {}", target.name(), e))
            })
            .collect()
    }
}

impl Sink for FanOutSink {
    fn emit(&self, line: &LogLine<'_>) -> Result<()> {
        let failures = self.collect_failures(|target| target.emit(line));
        if !self.targets.is_empty() && failures.len() == self.targets.len() {
            return Err(LoggerError::all_targets_failed(failures));
        }
        Ok(())
    }

    /// Closes every target, failing only if all of them failed.
    fn close(&self) -> Result<()> {
        let failures = self.collect_failures(|target| target.close());
        if !self.targets.is_empty() && failures.len() == self.targets.len() {
            return Err(LoggerError::all_targets_failed(failures));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "fan_out"
    }
}
