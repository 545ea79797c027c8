//! Sink trait for log output destinations

use super::{error::Result, log_line::LogLine};
use std::sync::Arc;

/// A destination that accepts pre-rendered lines.
///
/// Sinks are shared between routing tables, so every method takes `&self`
/// and implementations serialise their own I/O.
pub trait Sink: Send + Sync {
    fn emit(&self, line: &LogLine<'_>) -> Result<()>;

    /// Release the destination. Lines emitted afterwards may fail.
    fn close(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

/// Shared handle to a sink, as stored in routing tables.
pub type SharedSink = Arc<dyn Sink>;
