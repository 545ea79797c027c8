//! Core logger types and traits

pub mod builder;
pub mod config;
pub mod error;
pub mod global;
pub mod log_level;
pub mod log_line;
pub mod logger;
pub mod message;
pub mod routing;
pub mod sink;
pub mod std_bridge;
pub mod timestamp;

pub use builder::Builder;
pub use config::{parse_size, Config};
pub use error::{LoggerError, Result};
pub use global::{global, redirect, restore, set_exit_hook, DEFAULT_GLOBAL_LEVEL, ROOT_NAME};
pub use log_level::{parse_level, LogLevel, PANIC_LABEL};
pub use log_line::LogLine;
pub use logger::{ExitHook, LogPanic, NamedLogger, FATAL_EXIT_CODE};
pub use message::{sprint, sprintln};
pub use routing::{RoutingTable, BASE_CALL_DEPTH};
pub use sink::{SharedSink, Sink};
pub use std_bridge::{init_log_bridge, new_std_log, new_std_log_at, LevelWriter};
pub use timestamp::{LineFormat, TimestampFormat};
