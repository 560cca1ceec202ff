//! Logger module
//!
//! Provides logging utilities for the server:
//! - Startup and shutdown messages
//! - Access logging in several formats
//! - Error and warning logging with a level filter
//!
//! Everything goes to stderr unless a log file is configured. The one-line
//! startup banner is printed to stdout by the server itself.

mod format;
pub mod writer;

pub use format::{AccessLogEntry, AccessLogFormat};

use crate::config::LoggingConfig;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Log verbosity, ordered from quietest to loudest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
}

impl LogLevel {
    /// Whether a message at `message` level passes this filter
    pub fn allows(self, message: Self) -> bool {
        message != Self::Off && message <= self
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(Self::Off),
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" | "trace" => Ok(Self::Debug),
            other => Err(format!("unknown log level '{other}'")),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        f.write_str(name)
    }
}

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &LoggingConfig) -> std::io::Result<()> {
    let level = config.level.parse().unwrap_or_else(|e: String| {
        eprintln!("[WARN] {e}, using {}", LogLevel::Info);
        LogLevel::Info
    });
    writer::init(
        level,
        config.access_log_file.as_deref(),
        config.error_log_file.as_deref(),
    )
}

fn current_level() -> LogLevel {
    writer::get().map_or(LogLevel::default(), writer::LogWriter::level)
}

fn write_diagnostic(level: LogLevel, message: &str) {
    if !current_level().allows(level) {
        return;
    }
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_info(message: &str) {
    write_diagnostic(LogLevel::Info, message);
}

pub fn log_debug(message: &str) {
    write_diagnostic(LogLevel::Debug, &format!("[DEBUG] {message}"));
}

pub fn log_warning(message: &str) {
    write_diagnostic(LogLevel::Warn, &format!("[WARN] {message}"));
}

pub fn log_error(message: &str) {
    write_diagnostic(LogLevel::Error, &format!("[ERROR] {message}"));
}

pub fn log_connection_error(err: &impl fmt::Display) {
    log_error(&format!("Failed to serve connection: {err}"));
}

pub fn log_serving(root: &Path) {
    log_info(&format!("Serving files from {}", root.display()));
}

const INTERRUPT_MESSAGE: &str = "Keyboard interrupt received, exiting.";

pub fn log_interrupt() {
    log_info(INTERRUPT_MESSAGE);
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: AccessLogFormat) {
    if !current_level().allows(LogLevel::Info) {
        return;
    }
    let line = entry.format(format);
    match writer::get() {
        Some(w) => w.write_access(&line),
        None => eprintln!("{line}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parsing() {
        assert_eq!("INFO".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("off".parse::<LogLevel>(), Ok(LogLevel::Off));
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_level_display_parses_back() {
        for level in [
            LogLevel::Off,
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
        ] {
            assert_eq!(level.to_string().parse::<LogLevel>(), Ok(level));
        }
        assert_eq!(LogLevel::Warn.to_string(), "warn");
    }

    #[test]
    fn test_interrupt_message_is_one_line() {
        assert_eq!(INTERRUPT_MESSAGE.lines().count(), 1);
        assert!(!INTERRUPT_MESSAGE.starts_with('\n'));
    }

    #[test]
    fn test_level_filter() {
        assert!(LogLevel::Info.allows(LogLevel::Error));
        assert!(LogLevel::Info.allows(LogLevel::Info));
        assert!(!LogLevel::Info.allows(LogLevel::Debug));
        assert!(!LogLevel::Off.allows(LogLevel::Error));
        assert!(!LogLevel::Debug.allows(LogLevel::Off));
    }
}
