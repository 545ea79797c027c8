//! Size-limited file sink with numbered backups
//!
//! When a line would push the file past its byte limit, the current file is
//! renamed to `<stem>.1.<ext>`, older backups shift up by one, and anything
//! beyond the configured backup count is deleted. `app.log` therefore rotates
//! into `app.1.log`, `app.2.log`, ...

use crate::core::{LineFormat, LogLine, LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default byte limit (10 MiB)
pub const DEFAULT_LIMIT_BYTES: u64 = 10 * 1024 * 1024;

/// Default number of retained backups
pub const DEFAULT_BACKUP_COUNT: usize = 7;

/// When to rotate and how many backups to keep
///
/// # Examples
///
/// ```
/// use multi_logger::sinks::RotationPolicy;
///
/// let policy = RotationPolicy::new()
///     .with_max_size(1024 * 1024)
///     .with_max_backups(2);
/// assert!(policy.rotates());
/// assert!(!RotationPolicy::new().with_max_size(0).rotates());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Byte limit of the live file; 0 disables rotation
    pub max_bytes: u64,
    /// Maximum number of rotated files to keep
    pub max_backup_files: usize,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_LIMIT_BYTES,
            max_backup_files: DEFAULT_BACKUP_COUNT,
        }
    }
}

impl RotationPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_size(mut self, size: u64) -> Self {
        self.max_bytes = size;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_backups(mut self, count: usize) -> Self {
        self.max_backup_files = count;
        self
    }

    #[must_use]
    pub fn rotates(&self) -> bool {
        self.max_bytes > 0
    }
}

struct FileState {
    writer: Option<BufWriter<File>>,
    current_size: u64,
    closed: bool,
}

/// Rotating file sink
///
/// # Examples
///
/// ```no_run
/// use multi_logger::sinks::{RotatingFileSink, RotationPolicy};
///
/// let policy = RotationPolicy::new().with_max_size(1024 * 1024).with_max_backups(3);
/// let sink = RotatingFileSink::open("/var/log/app.log", policy).unwrap();
/// ```
pub struct RotatingFileSink {
    base_path: PathBuf,
    policy: RotationPolicy,
    line_format: LineFormat,
    state: Mutex<FileState>,
}

impl RotatingFileSink {
    /// Open (or create) the log file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::SinkOpen`] if the file cannot be created or opened
    pub fn open<P: AsRef<Path>>(path: P, policy: RotationPolicy) -> Result<Self> {
        let base_path = path.as_ref().to_path_buf();

        if let Some(parent) = base_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    LoggerError::sink_open(parent.display().to_string(), e)
                })?;
            }
        }

        let (file, current_size) = Self::open_file(&base_path)?;

        Ok(Self {
            base_path,
            policy,
            line_format: LineFormat::default(),
            state: Mutex::new(FileState {
                writer: Some(BufWriter::new(file)),
                current_size,
                closed: false,
            }),
        })
    }

    #[must_use]
    pub fn with_line_format(mut self, format: LineFormat) -> Self {
        self.line_format = format;
        self
    }

    fn open_file(path: &Path) -> Result<(File, u64)> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LoggerError::sink_open(path.display().to_string(), e))?;
        let size = file
            .metadata()
            .map_err(|e| LoggerError::sink_open(path.display().to_string(), e))?
            .len();
        Ok((file, size))
    }

    /// Path of the `index`-th backup, e.g. `app.2.log` for `app.log`.
    #[must_use]
    pub fn backup_path(&self, index: usize) -> PathBuf {
        let stem = self
            .base_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("app");
        let name = match self.base_path.extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{}.{}.{}", stem, index, ext),
            None => format!("{}.{}", stem, index),
        };
        self.base_path.with_file_name(name)
    }

    fn rotate(&self, state: &mut FileState) -> Result<()> {
        if let Some(mut writer) = state.writer.take() {
            writer.flush().map_err(|e| {
                LoggerError::file_rotation(
                    self.base_path.display().to_string(),
                    format!("Failed to flush before rotation: {}", e),
                )
            })?;
        }

        let max = self.policy.max_backup_files;
        if max == 0 {
            if self.base_path.exists() {
                fs::remove_file(&self.base_path).map_err(|e| {
                    LoggerError::file_rotation(
                        self.base_path.display().to_string(),
                        format!("Failed to discard full log file: {}", e),
                    )
                })?;
            }
        } else {
            let oldest = self.backup_path(max);
            if oldest.exists() {
                if let Err(e) = fs::remove_file(&oldest) {
                    eprintln!(
                        "[LOGGER WARN] Failed to remove oldest backup {}: {}",
                        oldest.display(),
                        e
                    );
                }
            }

            for i in (1..max).rev() {
                let old_path = self.backup_path(i);
                if old_path.exists() {
                    fs::rename(&old_path, self.backup_path(i + 1)).map_err(|e| {
                        LoggerError::file_rotation(
                            old_path.display().to_string(),
                            format!("Failed to shift backup: {}", e),
                        )
                    })?;
                }
            }

            if self.base_path.exists() {
                fs::rename(&self.base_path, self.backup_path(1)).map_err(|e| {
                    LoggerError::file_rotation(
                        self.base_path.display().to_string(),
                        format!("Failed to rotate current log file: {}", e),
                    )
                })?;
            }
        }

        let (file, size) = Self::open_file(&self.base_path)?;
        state.writer = Some(BufWriter::new(file));
        state.current_size = size;
        Ok(())
    }

    #[must_use]
    pub fn current_size(&self) -> u64 {
        self.state.lock().current_size
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.base_path
    }

    #[must_use]
    pub fn policy(&self) -> &RotationPolicy {
        &self.policy
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }
}

impl Sink for RotatingFileSink {
    fn emit(&self, entry: &LogLine<'_>) -> Result<()> {
        let output = entry.render(&self.line_format);
        let bytes = output.len() as u64;

        let mut state = self.state.lock();
        if state.closed {
            return Err(LoggerError::sink_closed(self.base_path.display().to_string()));
        }

        if self.policy.rotates()
            && state.current_size > 0
            && state.current_size + bytes > self.policy.max_bytes
        {
            if let Err(e) = self.rotate(&mut state) {
                eprintln!(
                    "[LOGGER WARN] Log rotation failed: {}. Continuing with current file.",
                    e
                );
                if state.writer.is_none() {
                    let (file, size) = Self::open_file(&self.base_path)?;
                    state.writer = Some(BufWriter::new(file));
                    state.current_size = size;
                }
                // Let the file grow past the limit rather than retry on every line.
                state.current_size = 0;
            }
        }

        let writer = state
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::sink_closed(self.base_path.display().to_string()))?;
        writer
            .write_all(output.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| LoggerError::io_operation("writing log file", e))?;
        state.current_size += bytes;
        Ok(())
    }

    fn close(&self) -> Result<()> {
        let mut state = self.state.lock();
        state.closed = true;
        if let Some(mut writer) = state.writer.take() {
            writer
                .flush()
                .map_err(|e| LoggerError::io_operation("closing log file", e))?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "rotating_file"
    }
}

impl Drop for RotatingFileSink {
    fn drop(&mut self) {
        if let Some(mut writer) = self.state.get_mut().writer.take() {
            let _ = writer.flush();
        }
    }
}
