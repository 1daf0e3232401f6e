//! Command-line interface.
//!
//! Every flag can also come from the environment; explicit flags win over
//! environment variables, and both win over the config file.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{finalize_config, load_config, ConfigError, LogFormat, MockConfig};

#[derive(Debug, Parser)]
#[command(name = "mock-platform")]
#[command(about = "Fixture server emulating identity-platform endpoints", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML configuration file.
    #[arg(short, long, env = "MOCK_PLATFORM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Full bind address, e.g. 127.0.0.1:8080.
    #[arg(short, long, env = "MOCK_PLATFORM_BIND")]
    pub bind: Option<String>,

    /// Port to listen on; keeps the host part of the bind address.
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, env = "MOCK_PLATFORM_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Log output format.
    #[arg(long, value_enum, env = "MOCK_PLATFORM_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    /// Merge defaults, the optional config file and these overrides, then
    /// validate the result.
    pub fn resolve_config(&self) -> Result<MockConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => MockConfig::default(),
        };

        if let Some(bind) = &self.bind {
            config.listener.bind_address = bind.clone();
        }
        if let Some(port) = self.port {
            config.listener.set_port(port);
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
        if let Some(format) = self.log_format {
            config.observability.log_format = format;
        }

        finalize_config(config)
    }
}
