// Application state module
// Immutable per-process state shared by every connection task

use std::path::{Path, PathBuf};

use super::types::Config;
use crate::logger::{AccessLogFormat, LogLevel};

/// Application state
pub struct AppState {
    pub config: Config,
    root: PathBuf,

    // Parsed once so the request path never re-reads config strings
    access_log: bool,
    access_log_format: AccessLogFormat,
}

impl AppState {
    pub fn new(config: Config, root: PathBuf) -> Self {
        let level: LogLevel = config.logging.level.parse().unwrap_or_default();
        let access_log = config.logging.access_log && level.allows(LogLevel::Info);
        let access_log_format = AccessLogFormat::from_name(&config.logging.access_log_format);

        Self {
            config,
            root,
            access_log,
            access_log_format,
        }
    }

    /// Directory whose contents are exposed over HTTP
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub const fn access_log(&self) -> Option<AccessLogFormat> {
        if self.access_log {
            Some(self.access_log_format)
        } else {
            None
        }
    }
}
