//! Process-wide default logger
//!
//! The global logger is built on first use: it is named `"root "` and sends
//! info and above to standard error. The free functions of this module
//! (`info`, `warnf`, `fatalln`, ...) log through it.
//!
//! Lifecycle:
//!
//! - [`redirect`] copies another logger's routing (and closer) into the
//!   global table. Loggers derived from [`global()`] follow the redirect,
//!   because they share that table.
//! - [`restore`] closes whatever the global logger holds and puts the fresh
//!   default routing back.

use super::{
    error::Result,
    log_level::LogLevel,
    logger::{ExitHook, NamedLogger},
    routing::RoutingTable,
    sink::SharedSink,
};
use crate::sinks::ConsoleSink;
use std::fmt::{self, Display};
use std::sync::{Arc, OnceLock};

/// Name prefix of the global logger.
pub const ROOT_NAME: &str = "root ";

/// Lowest level the default global logger writes.
pub const DEFAULT_GLOBAL_LEVEL: LogLevel = LogLevel::Info;

static GLOBAL: OnceLock<NamedLogger> = OnceLock::new();

fn default_table() -> RoutingTable {
    let console: SharedSink = Arc::new(ConsoleSink::new());
    let levels: Vec<LogLevel> = LogLevel::ALL
        .into_iter()
        .filter(|level| *level >= DEFAULT_GLOBAL_LEVEL)
        .collect();
    RoutingTable::with_sink(console, &levels)
}

/// The global logger used by the free functions.
pub fn global() -> &'static NamedLogger {
    GLOBAL.get_or_init(|| NamedLogger::new(ROOT_NAME, Arc::new(default_table())))
}

/// Route the global logger through `logger`'s sinks.
///
/// The global table receives a snapshot of `logger`'s entries and adopts its
/// closer, so a later [`restore`] closes that closer.
pub fn redirect(logger: &NamedLogger) {
    global().copy_from(logger);
}

/// Close the global logger's sinks and reinstall the default routing.
///
/// The default routing is reinstalled even when closing fails; the close
/// error is returned afterwards.
pub fn restore() -> Result<()> {
    let logger = global();
    let closed = logger.close();
    logger.table().copy_from(&default_table());
    closed
}

/// Replace the exit hook of the global logger, returning the previous hook.
///
/// The hook is shared with every logger derived from [`global()`], so
/// `global().derive(..).fatal(..)` and the free `fatal` functions call the
/// same hook.
pub fn set_exit_hook(hook: ExitHook) -> ExitHook {
    global().set_exit_hook(hook)
}

/// Write `text` at info level through the global logger.
#[track_caller]
pub fn output(call_depth: usize, text: &str) -> Result<()> {
    global().emit(1 + call_depth, LogLevel::Info, text)
}

macro_rules! global_level_fns {
    ($level:expr, $plain:ident, $formatted:ident, $line:ident) => {
        #[track_caller]
        pub fn $plain(message: impl Display) {
            let _ = global().emit(1, $level, message);
        }

        #[track_caller]
        pub fn $formatted(args: fmt::Arguments<'_>) {
            let _ = global().emitf(1, $level, args);
        }

        #[track_caller]
        pub fn $line(message: impl Display) {
            let _ = global().emitln(1, $level, message);
        }
    };
}

global_level_fns!(LogLevel::Trace, trace, tracef, traceln);
global_level_fns!(LogLevel::Debug, debug, debugf, debugln);
global_level_fns!(LogLevel::Info, info, infof, infoln);
global_level_fns!(LogLevel::Warn, warn, warnf, warnln);
global_level_fns!(LogLevel::Error, error, errorf, errorln);
global_level_fns!(LogLevel::Info, print, printf, println);

/// Log at fatal level, close the global logger, then exit with status 1.
#[track_caller]
pub fn fatal(message: impl Display) {
    let _ = global().emit(1, LogLevel::Fatal, message);
    global().terminate();
}

#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) {
    let _ = global().emitf(1, LogLevel::Fatal, args);
    global().terminate();
}

#[track_caller]
pub fn fatalln(message: impl Display) {
    let _ = global().emitln(1, LogLevel::Fatal, message);
    global().terminate();
}

/// Serialises tests that touch the global logger.
#[cfg(test)]
pub(crate) static TEST_LOCK: parking_lot::Mutex<()> = parking_lot::const_mutex(());
