//! Logging utilities module
//!
//! This module provides centralized logging setup. The default verbosity
//! follows the resolved environment: everything outside production logs at
//! `debug`, production logs at `info`. `RUST_LOG` takes precedence when set.

use crate::environment::Environment;
use crate::shared::error::ConfigError;

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging for the given environment
    pub fn initialize(environment: &Environment) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Self::default_level(environment)));

        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| ConfigError::Logging(e.to_string()))?;

        Ok(())
    }

    /// Default log level for an environment
    pub fn default_level(environment: &Environment) -> &'static str {
        if environment.is_production() {
            "info"
        } else {
            "debug"
        }
    }
}
