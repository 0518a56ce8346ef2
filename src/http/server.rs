//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address '{addr}': {source}")]
    Address {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Resolve the listen address from `[http] host` and `port`.
pub fn listen_addr(config: &AppConfig) -> Result<SocketAddr, ServerError> {
    let addr = format!("{}:{}", config.http.host, config.http.port);
    match addr.parse() {
        Ok(socket_addr) => Ok(socket_addr),
        Err(source) => Err(ServerError::Address { addr, source }),
    }
}

/// Start the plain HTTP server.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = listen_addr(config)?;
    let handle = Handle::new();

    tracing::info!(%addr, "Starting HTTP server");

    shutdown::setup_shutdown_handler(handle.clone(), config.http.shutdown_grace());

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
