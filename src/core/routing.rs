//! Per-level routing of rendered lines to sinks
//!
//! A [`RoutingTable`] maps each [`LogLevel`] to at most one sink and may hold
//! a closer, the sink released when the table is cleared. Tables are shared
//! between loggers through `Arc`; every operation takes the table's single
//! lock, so a bulk [`RoutingTable::copy_from`] or [`RoutingTable::clear`] is
//! never observed half-done by another operation on the same table.
//!
//! Sink I/O runs after the lock is released. A slow sink therefore delays only
//! its own callers, not lookups or updates on the table.

use super::{
    error::{LoggerError, Result},
    log_level::LogLevel,
    log_line::LogLine,
    sink::SharedSink,
};
use parking_lot::Mutex;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Frames between a table emit and the application call site, not counting
/// the caller-supplied depth.
pub const BASE_CALL_DEPTH: usize = 2;

#[derive(Default, Clone)]
struct TableState {
    sinks: [Option<SharedSink>; 6],
    closer: Option<SharedSink>,
}

#[derive(Default)]
pub struct RoutingTable {
    state: Mutex<TableState>,
}

impl RoutingTable {
    /// An empty table: every level is discarded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty table behind a shared handle.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// A table routing each of `levels` to the same sink.
    #[must_use]
    pub fn with_sink(sink: SharedSink, levels: &[LogLevel]) -> Self {
        let table = Self::new();
        {
            let mut state = table.state.lock();
            for level in levels {
                state.sinks[level.rank() as usize] = Some(Arc::clone(&sink));
            }
        }
        table
    }

    /// Assign or replace the sink for one level, returning the previous one.
    pub fn set_output(&self, level: LogLevel, sink: SharedSink) -> Option<SharedSink> {
        let mut state = self.state.lock();
        state.sinks[level.rank() as usize].replace(sink)
    }

    /// Unassign a level, returning the sink it had.
    pub fn remove_output(&self, level: LogLevel) -> Option<SharedSink> {
        let mut state = self.state.lock();
        state.sinks[level.rank() as usize].take()
    }

    pub fn get(&self, level: LogLevel) -> Option<SharedSink> {
        let state = self.state.lock();
        state.sinks[level.rank() as usize].clone()
    }

    pub fn is_routed(&self, level: LogLevel) -> bool {
        let state = self.state.lock();
        state.sinks[level.rank() as usize].is_some()
    }

    /// Levels with a sink assigned, in ascending order.
    pub fn routed_levels(&self) -> Vec<LogLevel> {
        let state = self.state.lock();
        LogLevel::ALL
            .into_iter()
            .filter(|level| state.sinks[level.rank() as usize].is_some())
            .collect()
    }

    /// Every assigned `(level, sink)` pair, read under one lock.
    pub fn entries(&self) -> Vec<(LogLevel, SharedSink)> {
        let state = self.state.lock();
        LogLevel::ALL
            .into_iter()
            .filter_map(|level| {
                state.sinks[level.rank() as usize]
                    .as_ref()
                    .map(|sink| (level, Arc::clone(sink)))
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        let state = self.state.lock();
        state.sinks.iter().all(Option::is_none)
    }

    /// Set the sink closed by [`RoutingTable::clear`], returning the previous one.
    pub fn set_closer(&self, closer: Option<SharedSink>) -> Option<SharedSink> {
        let mut state = self.state.lock();
        std::mem::replace(&mut state.closer, closer)
    }

    pub fn has_closer(&self) -> bool {
        self.state.lock().closer.is_some()
    }

    /// Hand `line` to the sink assigned to `level`.
    ///
    /// The sink sees a call depth of `2 + call_depth`. An unassigned level
    /// yields [`LoggerError::NoOutput`] and nothing is written.
    pub fn emit(
        &self,
        level: LogLevel,
        call_depth: usize,
        line: &str,
        location: &'static Location<'static>,
    ) -> Result<()> {
        let sink = self
            .get(level)
            .ok_or_else(|| LoggerError::no_output(level))?;
        sink.emit(&LogLine::at(line, BASE_CALL_DEPTH + call_depth, location))
    }

    /// Replace every entry with a snapshot of `other`, and adopt its closer.
    ///
    /// The snapshot is taken under `other`'s lock and installed under this
    /// table's lock; the two locks are never held together.
    pub fn copy_from(&self, other: &RoutingTable) {
        if std::ptr::eq(self, other) {
            return;
        }
        let snapshot = other.state.lock().clone();
        let mut state = self.state.lock();
        *state = snapshot;
    }

    /// Close the closer, if any, then drop every entry.
    ///
    /// The closer is released at most once; its close error is returned
    /// after the entries are gone.
    pub fn clear(&self) -> Result<()> {
        let closer = {
            let mut state = self.state.lock();
            state.sinks = Default::default();
            state.closer.take()
        };
        match closer {
            Some(closer) => closer.close(),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for RoutingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.entries()
                    .iter()
                    .map(|(level, sink)| (level, sink.name().to_string())),
            )
            .finish()
    }
}
