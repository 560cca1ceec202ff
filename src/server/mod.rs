//! Server module
//!
//! Binds the listener, prints the startup line and runs the accept loop.

pub mod connection;
pub mod listener;

pub use listener::create_listener;

use std::future::Future;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::{AppState, Config};
use crate::error::StartError;
use crate::logger;
use connection::spawn_connection;

/// A bound, not yet serving, file server
pub struct Server {
    listener: TcpListener,
    state: Arc<AppState>,
}

impl Server {
    /// Bind the configured address and prepare to serve `root`
    ///
    /// Must be called from within a Tokio runtime.
    pub fn bind(config: Config, root: PathBuf) -> Result<Self, StartError> {
        let addr = config.get_socket_addr()?;
        let listener =
            create_listener(addr).map_err(|source| StartError::Bind { addr, source })?;

        Ok(Self {
            listener,
            state: Arc::new(AppState::new(config, root)),
        })
    }

    /// The address actually bound (useful when the configured port is 0)
    pub fn local_addr(&self) -> Result<SocketAddr, StartError> {
        self.listener.local_addr().map_err(StartError::Serve)
    }

    /// The directory being served
    pub fn root(&self) -> &Path {
        self.state.root()
    }

    /// Serve until Ctrl+C
    pub async fn serve(self) -> Result<(), StartError> {
        self.serve_until(async {
            if tokio::signal::ctrl_c().await.is_err() {
                // no signal handler available: run until the process is killed
                std::future::pending::<()>().await;
            }
            logger::log_interrupt();
        })
        .await
    }

    /// Serve until `shutdown` completes
    ///
    /// Accept errors are logged and the loop keeps going. Connections already
    /// handed to tasks are not awaited on shutdown.
    pub async fn serve_until<F>(self, shutdown: F) -> Result<(), StartError>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                accept_result = self.listener.accept() => {
                    match accept_result {
                        Ok((stream, peer_addr)) => {
                            logger::log_debug(&format!("Accepted connection from {peer_addr}"));
                            spawn_connection(stream, peer_addr, Arc::clone(&self.state));
                        }
                        Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                    }
                }

                () = &mut shutdown => return Ok(()),
            }
        }
    }
}

/// The single line announced on stdout once the port is bound
pub fn status_line(port: u16) -> String {
    format!("Server running at http://localhost:{port}")
}

/// Bind, announce and serve `root` with `config`
///
/// Prints exactly one status line to stdout once the port is bound.
pub async fn start(config: Config, root: PathBuf) -> Result<(), StartError> {
    let server = Server::bind(config, root)?;
    let port = server.local_addr()?.port();

    println!("{}", status_line(port));
    logger::log_serving(server.root());

    server.serve().await
}
