//! Logging macros for ergonomic log message formatting.
//!
//! These macros wrap the format forms (`infof`, `errorf`, ...) so call sites
//! read like `println!`. The logger argument is any expression yielding a
//! [`NamedLogger`](crate::NamedLogger) or a reference to one.
//!
//! # Examples
//!
//! ```
//! use multi_logger::{info, Builder, Config};
//!
//! let logger = Builder::new(&Config::default()).logger("srv: ");
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // Through the global logger
//! info!(multi_logger::global(), "{} workers ready", 4);
//! ```

/// Log a formatted message at an explicit level.
///
/// Expands to a direct call on the logger, so the recorded location is the
/// macro call site.
///
/// # Examples
///
/// ```
/// # use multi_logger::prelude::*;
/// # let logger = NamedLogger::omitting("x: ");
/// use multi_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let _ = $logger.emitf(0, $level, ::std::format_args!($($arg)+));
    }};
}

/// Log a trace-level message.
///
/// ```
/// # let logger = multi_logger::NamedLogger::omitting("x: ");
/// use multi_logger::trace;
/// trace!(logger, "Entering function: calculate()");
/// trace!(logger, "Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message, close the logger, then call its exit hook.
///
/// Unlike the other level macros this does not return to normal flow with
/// the default hook: the process exits with status 1.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::std::format_args!($($arg)+))
    };
}

/// Join values with single spaces, as the concatenation forms do.
///
/// ```
/// use multi_logger::sprint;
/// assert_eq!(sprint!("retry", 3, "of", 5), "retry 3 of 5");
/// ```
#[macro_export]
macro_rules! sprint {
    ($($arg:expr),* $(,)?) => {
        $crate::core::message::sprint(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// [`sprint!`] with a trailing newline.
#[macro_export]
macro_rules! sprintln {
    ($($arg:expr),* $(,)?) => {
        $crate::core::message::sprintln(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}
