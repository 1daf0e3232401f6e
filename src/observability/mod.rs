//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers, server, lifecycle
//!     → tracing events with structured fields
//!     → logging.rs subscriber (EnvFilter + fmt layer)
//!     → stdout (pretty or JSON)
//! ```
//!
//! # Design Decisions
//! - Request ID is attached to every request span
//! - `RUST_LOG` wins over the configured level

pub mod logging;

pub use logging::init_logging;
