//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MockConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use crate::config::schema::MockConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),
    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,
    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &MockConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&MockConfig::default()).is_ok());
    }

    #[test]
    fn test_bad_bind_address() {
        let mut config = MockConfig::default();
        config.listener.bind_address = "localhost".to_string();
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::InvalidBindAddress("localhost".into())])
        );
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let mut config = MockConfig::default();
        config.observability.log_level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());

        config.observability.log_level = "verbose".to_string();
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::UnknownLogLevel("verbose".into())])
        );
    }
}
