// Configuration types module
// Every section falls back to its Default, so an empty source yields the
// stock launcher behavior (0.0.0.0:8000, `out` or the base directory).

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub root: RootConfig,
    pub http: HttpConfig,
    pub performance: PerformanceConfig,
    pub logging: LoggingConfig,
}

/// Listener configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Worker threads; `None` keeps everything on one thread
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            workers: None,
        }
    }
}

/// Serving root selection
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RootConfig {
    /// Subdirectory preferred over the base directory when it exists
    pub candidate: String,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            candidate: "out".to_string(),
        }
    }
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HttpConfig {
    pub server_name: String,
    pub index_files: Vec<String>,
    pub keep_alive: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            server_name: concat!("outserve/", env!("CARGO_PKG_VERSION")).to_string(),
            index_files: vec!["index.html".to_string(), "index.htm".to_string()],
            keep_alive: true,
        }
    }
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Upper bound on a single connection's lifetime, in seconds
    pub connection_timeout: u64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            connection_timeout: 30,
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (common, combined or json)
    pub access_log_format: String,
    /// Access log file path (stderr if not set)
    pub access_log_file: Option<String>,
    /// Error log file path (stderr if not set)
    pub error_log_file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            access_log: true,
            access_log_format: "common".to_string(),
            access_log_file: None,
            error_log_file: None,
        }
    }
}
