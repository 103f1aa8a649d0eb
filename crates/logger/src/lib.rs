//! Logging infrastructure for notepad.
//!
//! A small, thread-safe logger that appends timestamped lines to a file.
//! Logging before [`init`] is a no-op, so library crates can log
//! unconditionally.

use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Convert log level to string
    pub fn to_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

#[derive(Debug)]
struct Logger {
    min_level: LogLevel,
    /// None discards every message
    file_path: Option<PathBuf>,
}

impl Logger {
    fn new(file_path: Option<PathBuf>, min_level: LogLevel) -> Self {
        if let Some(path) = &file_path {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }

            // Truncate on startup
            if let Ok(mut file) = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)
            {
                let _ = writeln!(file, "=== Notepad Log Start ===");
            }
        }

        Self {
            min_level,
            file_path,
        }
    }

    fn add_entry(&mut self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }
        let Some(path) = &self.file_path else {
            return;
        };

        let timestamp = Local::now().format("%H:%M:%S");
        if let Ok(mut file) = OpenOptions::new().append(true).create(true).open(path) {
            let _ = writeln!(file, "[{}] {}: {}", timestamp, level.to_str(), message);
        }
    }
}

/// Global logger instance that persists for the application lifetime.
static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Initialize the global logger.
///
/// Subsequent calls are ignored.
///
/// # Arguments
///
/// * `file_path` - Log file path, or `None` to discard messages
/// * `min_level` - Minimum log level to record
pub fn init(file_path: Option<PathBuf>, min_level: LogLevel) {
    LOGGER.get_or_init(|| Mutex::new(Logger::new(file_path, min_level)));
}

fn with_logger(f: impl FnOnce(&mut Logger)) {
    if let Some(logger) = LOGGER.get() {
        if let Ok(mut logger) = logger.lock() {
            f(&mut logger);
        }
    }
}

/// Log a debug message
pub fn debug(message: impl AsRef<str>) {
    with_logger(|logger| logger.add_entry(LogLevel::Debug, message.as_ref()));
}

/// Log an informational message
pub fn info(message: impl AsRef<str>) {
    with_logger(|logger| logger.add_entry(LogLevel::Info, message.as_ref()));
}

/// Log a warning message
pub fn warn(message: impl AsRef<str>) {
    with_logger(|logger| logger.add_entry(LogLevel::Warn, message.as_ref()));
}

/// Log an error message
pub fn error(message: impl AsRef<str>) {
    with_logger(|logger| logger.add_entry(LogLevel::Error, message.as_ref()));
}
