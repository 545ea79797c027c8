//! Named logger facade
//!
//! A [`NamedLogger`] pairs a name prefix with a shared [`RoutingTable`].
//! Every level has three call forms: `info(msg)`, `infof(format_args!(..))`
//! and `infoln(msg)`. Rendered lines look like `INFO main: message`.
//!
//! Loggers made with [`NamedLogger::derive`] alias the parent's table:
//! routing changes, and [`NamedLogger::close`], are seen by every logger
//! holding that table.

use super::{
    error::Result,
    log_level::{LogLevel, PANIC_LABEL},
    message::render_line,
    routing::RoutingTable,
    sink::SharedSink,
};
use parking_lot::Mutex;
use std::fmt::{self, Display};
use std::panic::Location;
use std::sync::Arc;

/// Status passed to the exit hook by the `fatal` family.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Called by the `fatal` family after the logger is closed.
///
/// The default hook is [`std::process::exit`]; tests install one that
/// records the status instead.
pub type ExitHook = Arc<dyn Fn(i32) + Send + Sync>;

/// Hook slot shared by a logger and everything derived from it.
type SharedExitHook = Arc<Mutex<ExitHook>>;

fn process_exit() -> SharedExitHook {
    Arc::new(Mutex::new(Arc::new(|code| std::process::exit(code))))
}

/// Payload of the unwind started by the `panic` family.
///
/// ```
/// use multi_logger::{LogPanic, NamedLogger};
/// use std::panic::{catch_unwind, AssertUnwindSafe};
///
/// let logger = NamedLogger::omitting("app: ");
/// let caught = catch_unwind(AssertUnwindSafe(|| logger.panic("boom"))).unwrap_err();
/// let payload = caught.downcast_ref::<LogPanic>().unwrap();
/// assert_eq!(payload.message, "boom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPanic {
    pub message: String,
}

impl Display for LogPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for LogPanic {}

#[derive(Clone)]
pub struct NamedLogger {
    name: String,
    table: Arc<RoutingTable>,
    exit_hook: SharedExitHook,
}

macro_rules! level_methods {
    ($level:expr, $plain:ident, $formatted:ident, $line:ident, $label:literal) => {
        #[doc = concat!("Log the message at ", $label, ".")]
        #[inline]
        #[track_caller]
        pub fn $plain(&self, message: impl Display) {
            let _ = self.emit(1, $level, message);
        }

        #[doc = concat!("Log `format_args!` output at ", $label, ".")]
        #[inline]
        #[track_caller]
        pub fn $formatted(&self, args: fmt::Arguments<'_>) {
            let _ = self.emitf(1, $level, args);
        }

        #[doc = concat!("Log the message and a trailing newline at ", $label, ".")]
        #[inline]
        #[track_caller]
        pub fn $line(&self, message: impl Display) {
            let _ = self.emitln(1, $level, message);
        }
    };
}

impl NamedLogger {
    /// A logger over an existing (possibly shared) table.
    #[must_use]
    pub fn new(name: impl Into<String>, table: Arc<RoutingTable>) -> Self {
        Self {
            name: name.into(),
            table,
            exit_hook: process_exit(),
        }
    }

    /// A logger with an empty table; every call is discarded until a sink
    /// is assigned with [`NamedLogger::set_output`].
    #[must_use]
    pub fn omitting(name: impl Into<String>) -> Self {
        Self::new(name, RoutingTable::shared())
    }

    /// A logger routing `levels` (all six when `None`) to one sink.
    #[must_use]
    pub fn with_sink(
        name: impl Into<String>,
        sink: SharedSink,
        levels: Option<&[LogLevel]>,
    ) -> Self {
        let levels = levels.unwrap_or(&LogLevel::ALL);
        Self::new(name, Arc::new(RoutingTable::with_sink(sink, levels)))
    }

    /// This logger with its own exit hook slot holding `hook`.
    ///
    /// Loggers derived afterwards share the new slot; the logger this one
    /// was cloned from keeps its hook.
    #[must_use]
    pub fn with_exit_hook(mut self, hook: ExitHook) -> Self {
        self.exit_hook = Arc::new(Mutex::new(hook));
        self
    }

    /// Replace the exit hook seen by this logger and every logger sharing
    /// its slot, returning the previous hook.
    pub fn set_exit_hook(&self, hook: ExitHook) -> ExitHook {
        std::mem::replace(&mut *self.exit_hook.lock(), hook)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> &Arc<RoutingTable> {
        &self.table
    }

    /// A logger with a new name over the same table.
    ///
    /// Nothing is copied: routing changes through either logger are visible
    /// through both, and closing either empties the table for both. The
    /// exit hook slot is shared the same way.
    #[must_use]
    pub fn derive(&self, name: impl Into<String>) -> NamedLogger {
        Self {
            name: name.into(),
            table: Arc::clone(&self.table),
            exit_hook: Arc::clone(&self.exit_hook),
        }
    }

    /// True when both loggers route through the same table.
    pub fn shares_table_with(&self, other: &NamedLogger) -> bool {
        Arc::ptr_eq(&self.table, &other.table)
    }

    pub fn set_output(&self, level: LogLevel, sink: SharedSink) -> Option<SharedSink> {
        self.table.set_output(level, sink)
    }

    pub fn get(&self, level: LogLevel) -> Option<SharedSink> {
        self.table.get(level)
    }

    pub fn set_closer(&self, closer: Option<SharedSink>) -> Option<SharedSink> {
        self.table.set_closer(closer)
    }

    /// Replace this logger's routing with a snapshot of `other`'s.
    pub fn copy_from(&self, other: &NamedLogger) {
        self.table.copy_from(&other.table);
    }

    /// Release the closer and drop every routing entry of the shared table.
    pub fn close(&self) -> Result<()> {
        self.table.clear()
    }

    fn route(
        &self,
        call_depth: usize,
        level: LogLevel,
        label: &str,
        message: fmt::Arguments<'_>,
        location: &'static Location<'static>,
    ) -> Result<()> {
        let line = render_line(label, &self.name, message);
        self.table.emit(level, call_depth, &line, location)
    }

    /// Render and route a concatenation-form message.
    ///
    /// Returns [`LoggerError::NoOutput`](crate::LoggerError::NoOutput) when
    /// `level` has no sink.
    #[track_caller]
    pub fn emit(&self, call_depth: usize, level: LogLevel, message: impl Display) -> Result<()> {
        let location = Location::caller();
        self.route(call_depth, level, level.label(), format_args!("{}", message), location)
    }

    #[track_caller]
    pub fn emitf(&self, call_depth: usize, level: LogLevel, args: fmt::Arguments<'_>) -> Result<()> {
        let location = Location::caller();
        self.route(call_depth, level, level.label(), args, location)
    }

    #[track_caller]
    pub fn emitln(&self, call_depth: usize, level: LogLevel, message: impl Display) -> Result<()> {
        let location = Location::caller();
        self.route(call_depth, level, level.label(), format_args!("{}\n", message), location)
    }

    /// Write `text` at info level, for code expecting a plain text sink.
    #[track_caller]
    pub fn output(&self, call_depth: usize, text: &str) -> Result<()> {
        self.emit(1 + call_depth, LogLevel::Info, text)
    }

    level_methods!(LogLevel::Trace, trace, tracef, traceln, "trace level");
    level_methods!(LogLevel::Debug, debug, debugf, debugln, "debug level");
    level_methods!(LogLevel::Info, info, infof, infoln, "info level");
    level_methods!(LogLevel::Warn, warn, warnf, warnln, "warn level");
    level_methods!(LogLevel::Error, error, errorf, errorln, "error level");
    level_methods!(LogLevel::Info, print, printf, println, "info level (print alias)");

    /// Log at fatal level, close the logger, then call the exit hook with
    /// status 1.
    #[track_caller]
    pub fn fatal(&self, message: impl Display) {
        let _ = self.emit(1, LogLevel::Fatal, message);
        self.terminate();
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        let _ = self.emitf(1, LogLevel::Fatal, args);
        self.terminate();
    }

    #[track_caller]
    pub fn fatalln(&self, message: impl Display) {
        let _ = self.emitln(1, LogLevel::Fatal, message);
        self.terminate();
    }

    pub(crate) fn terminate(&self) {
        if let Err(e) = self.close() {
            eprintln!("[LOGGER ERROR] Failed to close logger before exit: {}", e);
        }
        let hook = Arc::clone(&self.exit_hook.lock());
        hook(FATAL_EXIT_CODE);
    }

    /// Log with the `PANIC` label through the fatal route, then unwind with
    /// a [`LogPanic`] payload.
    #[track_caller]
    pub fn panic(&self, message: impl Display) -> ! {
        self.raise(message.to_string(), Location::caller())
    }

    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        self.raise(fmt::format(args), Location::caller())
    }

    #[track_caller]
    pub fn panicln(&self, message: impl Display) -> ! {
        self.raise(format!("{}\n", message), Location::caller())
    }

    fn raise(&self, message: String, location: &'static Location<'static>) -> ! {
        let _ = self.route(
            1,
            LogLevel::Fatal,
            PANIC_LABEL,
            format_args!("{}", message),
            location,
        );
        std::panic::panic_any(LogPanic { message })
    }
}

impl fmt::Debug for NamedLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedLogger")
            .field("name", &self.name)
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}
