// Configuration module entry point
// Loads optional settings and holds the runtime state built from them

mod state;
mod types;

use std::net::{AddrParseError, SocketAddr};

pub use state::AppState;
pub use types::{Config, HttpConfig, LoggingConfig, PerformanceConfig, RootConfig, ServerConfig};

/// Base name of the optional configuration file ("outserve.toml", ".yaml", ...)
pub const DEFAULT_CONFIG_NAME: &str = "outserve";

impl Config {
    /// Load configuration from the default file name and `OUTSERVE_*` variables
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_NAME)
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional. Environment variables take a single `_` after
    /// the prefix and `__` between nested keys, e.g. `OUTSERVE_SERVER__PORT=9000`.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("OUTSERVE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_launcher() {
        let cfg = Config::default();
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.workers, None);
        assert_eq!(cfg.root.candidate, "out");
        assert_eq!(cfg.http.index_files, vec!["index.html", "index.htm"]);
        assert!(cfg.http.server_name.starts_with("outserve/"));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent");
        let cfg = Config::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.logging.access_log_format, "common");
    }

    #[test]
    fn test_partial_file_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9100\n\n[logging]\naccess_log = false\n",
        )
        .unwrap();

        let base = dir.path().join("custom");
        let cfg = Config::load_from(base.to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.port, 9100);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert!(!cfg.logging.access_log);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_env_overrides_defaults() {
        // keys no other test asserts on, since tests share the process environment
        std::env::set_var("OUTSERVE_ROOT__CANDIDATE", "dist");
        std::env::set_var("OUTSERVE_PERFORMANCE__CONNECTION_TIMEOUT", "5");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent");
        let loaded = Config::load_from(path.to_str().unwrap());

        std::env::remove_var("OUTSERVE_ROOT__CANDIDATE");
        std::env::remove_var("OUTSERVE_PERFORMANCE__CONNECTION_TIMEOUT");

        let cfg = loaded.unwrap();
        assert_eq!(cfg.root.candidate, "dist");
        assert_eq!(cfg.performance.connection_timeout, 5);
    }

    #[test]
    fn test_socket_addr() {
        let cfg = Config::default();
        assert_eq!(cfg.get_socket_addr().unwrap().port(), 8000);

        let mut bad = Config::default();
        bad.server.host = "not a host".to_string();
        assert!(bad.get_socket_addr().is_err());
    }
}
