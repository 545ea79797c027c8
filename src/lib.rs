//! # Multi Logger
//!
//! A leveled logging facade. Each logger carries a name prefix and a routing
//! table that sends every level to its own sink, or discards it.
//!
//! ## Features
//!
//! - **Per-level routing**: any level can go to the console, a rotating file,
//!   both at once, or nowhere
//! - **Shared tables**: loggers derived from one another share routing, so
//!   redirecting the global logger redirects every module logger with it
//! - **Three call forms**: `info`, `infof` and `infoln` on every level
//! - **Configuration**: build the console and file outputs from a JSON
//!   [`Config`]
//!
//! ```
//! use multi_logger::{Builder, Config, LogLevel};
//!
//! let config = Config::new().with_console(true, LogLevel::Info);
//! let logger = Builder::new(&config).logger("main: ");
//! logger.info("service started");
//! logger.debugf(format_args!("not routed: {}", 1));
//! ```
//!
//! The free functions at the crate root log through the process-wide
//! [`global()`] logger:
//!
//! ```
//! multi_logger::infof(format_args!("listening on {}", 8080));
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Builder, Config, LineFormat, LogLevel, LoggerError, NamedLogger, Result, SharedSink,
        Sink, TimestampFormat,
    };
    pub use crate::sinks::{ConsoleSink, FanOutSink, MemorySink, RotatingFileSink};
}

pub use crate::core::global::{
    debug, debugf, debugln, error, errorf, errorln, fatal, fatalf, fatalln, info, infof, infoln,
    output, print, printf, println, trace, tracef, traceln, warn, warnf, warnln,
};
pub use crate::core::{
    global, init_log_bridge, new_std_log, new_std_log_at, parse_level, parse_size, redirect,
    restore, set_exit_hook, sprint, sprintln, Builder, Config, ExitHook, LevelWriter, LineFormat,
    LogLevel, LogLine, LogPanic, LoggerError, NamedLogger, Result, RoutingTable, SharedSink, Sink,
    TimestampFormat, FATAL_EXIT_CODE, PANIC_LABEL,
};
pub use crate::sinks::{ConsoleSink, FanOutSink, MemorySink, RotatingFileSink, RotationPolicy};
