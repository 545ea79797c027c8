//! Error types for the logger system

use super::log_level::LogLevel;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The routing table has no sink assigned for the level
    #[error("No output configured for level {level}")]
    NoOutput { level: LogLevel },

    /// A sink's destination could not be opened
    #[error("Failed to open sink '{path}': {source}")]
    SinkOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Every target of a fan-out sink failed
    #[error("All {} fan-out targets failed: {}", failures.len(), failures.join("; "))]
    AllTargetsFailed { failures: Vec<String> },

    /// The sink has been closed and no longer accepts lines
    #[error("Sink '{name}' is closed")]
    SinkClosed { name: String },

    /// IO error with context
    #[error("IO error while {operation}: {source}")]
    IoOperation {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File rotation error
    #[error("File rotation failed for '{path}': {message}")]
    FileRotationError { path: String, message: String },

    /// Size string could not be parsed
    #[error("Invalid size '{input}': {message}")]
    InvalidSize { input: String, message: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create a no-output error for a level
    pub fn no_output(level: LogLevel) -> Self {
        LoggerError::NoOutput { level }
    }

    pub fn sink_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkOpen {
            path: path.into(),
            source,
        }
    }

    pub fn all_targets_failed(failures: Vec<String>) -> Self {
        LoggerError::AllTargetsFailed { failures }
    }

    pub fn sink_closed(name: impl Into<String>) -> Self {
        LoggerError::SinkClosed { name: name.into() }
    }

    /// Create an IO operation error with context
    pub fn io_operation(operation: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            source,
        }
    }

    /// Create a file rotation error
    pub fn file_rotation(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileRotationError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn invalid_size(input: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidSize {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// True when the error only signals that nothing was routed
    #[must_use]
    pub fn is_no_output(&self) -> bool {
        matches!(self, LoggerError::NoOutput { .. })
    }
}
