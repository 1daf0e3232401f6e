//! Mock identity platform.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ listener ──▶ axum router ──▶ route table ──▶ fixture
//!                                   (trace, id,    (exact path,    (static or
//!                                    timeout)       any method)     generated)
//!     ◀────────────── 200 application/json ◀───────────────────────────┘
//! ```
//!
//! Unregistered paths get Axum's default 404.

use clap::Parser;
use std::process::ExitCode;

use mock_platform::cli::Cli;
use mock_platform::http::HttpServer;
use mock_platform::lifecycle::{bind_listener, signals, Shutdown, StartupError};
use mock_platform::observability::init_logging;
use mock_platform::routing::RouteTable;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            // No subscriber yet: the configured format is what failed to load.
            eprintln!("mock-platform: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.observability);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "mock-platform starting");

    match run(config).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Fatal startup error");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: mock_platform::MockConfig) -> Result<(), StartupError> {
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    for route in RouteTable::default().routes() {
        tracing::info!(route = route.name, path = route.path, "Serving fixture");
    }

    let listener = bind_listener(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    server
        .run(listener, server_shutdown)
        .await
        .map_err(StartupError::Serve)
}
