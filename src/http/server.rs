//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with one entry per fixture route
//! - Wire up middleware (tracing, timeout, request ID)
//! - Serve on a bound listener until shutdown is signalled

use axum::{body::Body, http::Request, routing::any, Router};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::MockConfig;
use crate::http::request::{propagate_request_id_layer, request_id_of, set_request_id_layer};
use crate::routing::RouteTable;

/// HTTP server for the mock platform.
pub struct HttpServer {
    router: Router,
    config: MockConfig,
}

impl HttpServer {
    /// Create a new HTTP server serving the standard route table.
    pub fn new(config: MockConfig) -> Self {
        let router = build_router(&RouteTable::default(), &config);
        Self { router, config }
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns once `shutdown` fires and in-flight requests have drained.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// A clone of the fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &MockConfig {
        &self.config
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(table: &RouteTable, config: &MockConfig) -> Router {
    let mut router = Router::new();
    for route in table.routes() {
        let handler = route.handler;
        tracing::debug!(route = route.name, path = route.path, "Registering route");
        router = router.route(route.path, any(move || async move { handler() }));
    }

    router
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                path = %request.uri().path(),
                request_id = %request_id_of(request),
            )
        }))
        .layer(set_request_id_layer())
}
