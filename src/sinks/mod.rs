//! Sink implementations

pub mod console;
pub mod fan_out;
pub mod memory;
pub mod rotating_file;

pub use console::ConsoleSink;
pub use fan_out::FanOutSink;
pub use memory::{MemorySink, RecordedLine};
pub use rotating_file::{RotatingFileSink, RotationPolicy};

pub use crate::core::Sink;
