//! Startup orchestration.
//!
//! Any error here is fatal: `main` logs it and exits non-zero.

use tokio::net::TcpListener;

use crate::config::ConfigError;

/// Everything that can stop the server from coming up.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Bind the TCP listener for `address`.
pub async fn bind_listener(address: &str) -> Result<TcpListener, StartupError> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.to_string(),
            source,
        })?;

    let local_addr = listener.local_addr().map_err(|source| StartupError::Bind {
        address: address.to_string(),
        source,
    })?;
    tracing::info!(address = %local_addr, "Listener bound");

    Ok(listener)
}
