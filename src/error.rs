//! Startup error type
//!
//! Everything that can stop the server before (or instead of) serving.
//! Request-level failures never surface here; they become HTTP responses.

use std::error::Error;
use std::fmt;
use std::io;
use std::net::{AddrParseError, SocketAddr};

#[derive(Debug)]
pub enum StartError {
    Config(config::ConfigError),
    Address(AddrParseError),
    Logger(io::Error),
    Runtime(io::Error),
    Bind { addr: SocketAddr, source: io::Error },
    Serve(io::Error),
}

impl fmt::Display for StartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid configuration: {err}"),
            Self::Address(err) => write!(f, "invalid listen address: {err}"),
            Self::Logger(err) => write!(f, "failed to open log file: {err}"),
            Self::Runtime(err) => write!(f, "failed to start runtime: {err}"),
            Self::Bind { addr, source } => write!(f, "failed to bind {addr}: {source}"),
            Self::Serve(err) => write!(f, "server error: {err}"),
        }
    }
}

impl Error for StartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Address(err) => Some(err),
            Self::Logger(err) | Self::Runtime(err) | Self::Serve(err) => Some(err),
            Self::Bind { source, .. } => Some(source),
        }
    }
}

impl From<config::ConfigError> for StartError {
    fn from(error: config::ConfigError) -> Self {
        Self::Config(error)
    }
}

impl From<AddrParseError> for StartError {
    fn from(error: AddrParseError) -> Self {
        Self::Address(error)
    }
}

impl StartError {
    /// Whether the failure was the port already being taken
    pub fn is_addr_in_use(&self) -> bool {
        matches!(self, Self::Bind { source, .. } if source.kind() == io::ErrorKind::AddrInUse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_display_and_source() {
        let err = StartError::Bind {
            addr: "0.0.0.0:8000".parse().unwrap(),
            source: io::Error::from(io::ErrorKind::AddrInUse),
        };
        assert!(err.to_string().starts_with("failed to bind 0.0.0.0:8000"));
        assert!(err.source().is_some());
        assert!(err.is_addr_in_use());
    }

    #[test]
    fn test_address_conversion() {
        let parse_err = "nope".parse::<SocketAddr>().unwrap_err();
        let err: StartError = parse_err.into();
        assert!(matches!(err, StartError::Address(_)));
        assert!(!err.is_addr_in_use());
    }
}
