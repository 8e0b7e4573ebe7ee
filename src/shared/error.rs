//! Error handling module
//!
//! This module provides centralized error handling for the crate. Every
//! error carries the offending configuration file path for diagnosability;
//! nothing is logged or retried internally, the caller decides.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to resolve configuration path {}: {source}", path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration file does not exist: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Error loading configuration file {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;
