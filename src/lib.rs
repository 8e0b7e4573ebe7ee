//! Process-wide configuration for web services
//!
//! This library resolves the runtime environment, loads a YAML configuration
//! file with environment-variable overrides and per-field defaults, caches the
//! parsed result for the lifetime of the process, and exposes typed HTTP
//! listener settings.

pub mod environment;
pub mod loader;
pub mod settings;
pub mod shared;

pub use environment::Environment;
pub use loader::ConfigLoader;
pub use settings::{AppConfig, HttpConfig, TlsConfig};
pub use shared::error::{ConfigError, ConfigResult};

/// Crate result type
pub type Result<T> = std::result::Result<T, shared::error::ConfigError>;
