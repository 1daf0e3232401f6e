//! Mock identity-platform server library.
//!
//! Serves canned JSON for the OTP, audit, notifier, token and master-data
//! endpoints so clients can run without the real backends.

pub mod cli;
pub mod config;
pub mod fixtures;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::MockConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
