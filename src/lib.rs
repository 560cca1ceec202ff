//! > Local static file server for previewing generated output
//!
//! Serves the `out` subdirectory of the working directory when it exists,
//! otherwise the working directory itself, on port 8000.
//!
//! # Example
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), outserve::StartError> {
//! let config = outserve::Config::load()?;
//! let base = std::env::current_dir().unwrap_or_else(|_| ".".into());
//! let root = outserve::resolve_root(&base, &config.root.candidate);
//!
//! outserve::start(config, root).await
//! # }
//! ```

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod root;
pub mod server;

pub use config::Config;
pub use error::StartError;
pub use root::resolve_root;
pub use server::{start, Server};
