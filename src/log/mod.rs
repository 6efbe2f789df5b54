//! File-backed debug logging.
//!
//! Logging is off by default. When enabled (via `--debug` or `debug_mode` in the
//! settings file) entries go to `~/.hostpick/logs/hostpick.log`.

mod debug;
mod errors;
mod formatter;
mod macros;

pub use errors::LogError;
pub use formatter::LogFormatter;

use debug::DebugLogger;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

/// Process-wide logger used by the `log_*!` macros.
pub static LOGGER: Lazy<Logger> = Lazy::new(Logger::new);

#[cfg(test)]
pub(crate) static LOG_MODE_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

pub struct Logger {
    debug_logger: DebugLogger,
}

impl Logger {
    fn new() -> Self {
        Self {
            debug_logger: DebugLogger::new(),
        }
    }

    pub fn enable_debug(&self) {
        DEBUG_MODE.store(true, Ordering::SeqCst);
    }

    pub fn disable_debug(&self) {
        DEBUG_MODE.store(false, Ordering::SeqCst);
    }

    pub fn is_debug_enabled(&self) -> bool {
        DEBUG_MODE.load(Ordering::SeqCst)
    }

    pub fn log_debug(&self, message: &str) -> Result<(), LogError> {
        self.log(LogLevel::Debug, message)
    }

    pub fn log_info(&self, message: &str) -> Result<(), LogError> {
        self.log(LogLevel::Info, message)
    }

    pub fn log_warn(&self, message: &str) -> Result<(), LogError> {
        self.log(LogLevel::Warning, message)
    }

    pub fn log_error(&self, message: &str) -> Result<(), LogError> {
        self.log(LogLevel::Error, message)
    }

    /// Flush buffered entries to disk.
    pub fn flush(&self) -> Result<(), LogError> {
        self.debug_logger.flush()
    }

    fn log(&self, level: LogLevel, message: &str) -> Result<(), LogError> {
        if !self.is_debug_enabled() {
            return Ok(());
        }
        self.debug_logger.log(level, message)
    }
}

#[cfg(test)]
#[path = "../test/log.rs"]
mod tests;
