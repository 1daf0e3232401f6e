//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults
//!     → loader.rs (optional TOML file)
//!     → environment / CLI overrides (main.rs)
//!     → validation.rs (semantic checks)
//!     → MockConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults so the server starts with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{finalize_config, load_config, ConfigError};
pub use schema::{ListenerConfig, LogFormat, MockConfig, ObservabilityConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
