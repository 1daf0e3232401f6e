//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! ROUTES (compile-time table: path → handler)
//!     → router.rs (RouteTable)
//!     → http/server.rs mounts every entry on the Axum router
//!     → Unknown paths fall through to Axum's default 404
//! ```
//!
//! # Design Decisions
//! - Table is a constant, immutable at runtime (thread-safe without locks)
//! - Exact path match only, method-agnostic
//! - Deterministic: same path always reaches the same handler

pub mod router;

pub use router::{Route, RouteTable, ROUTES};
