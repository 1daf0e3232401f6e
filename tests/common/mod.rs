//! Shared utilities for integration tests.

use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use std::net::SocketAddr;
use std::time::Duration;
use tower::ServiceExt;

use mock_platform::config::MockConfig;
use mock_platform::http::HttpServer;
use mock_platform::lifecycle::{bind_listener, Shutdown};

/// The fully layered router with default settings.
#[allow(dead_code)]
pub fn router() -> Router {
    HttpServer::new(MockConfig::default()).router()
}

/// Drive one request through the router in-process.
#[allow(dead_code)]
pub async fn send(
    router: Router,
    method: Method,
    path: &str,
    body: &'static str,
) -> (StatusCode, HeaderMap, Bytes) {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .body(Body::from(body))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, bytes)
}

/// Start a real server on an ephemeral port.
#[allow(dead_code)]
pub async fn start_server() -> (SocketAddr, Shutdown) {
    let mut config = MockConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();

    let listener = bind_listener(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    (addr, shutdown)
}
