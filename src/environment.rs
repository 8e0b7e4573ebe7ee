//! Runtime environment detection
//!
//! This module classifies the running process into a deployment environment
//! based on the `APP_ENV` variable, read once at startup.

use std::env;
use std::fmt;

/// Environment variable consulted to classify the running process
pub const ENVIRONMENT_VAR: &str = "APP_ENV";

/// Deployment environment of the application
///
/// The enumeration is open-world: any tag is accepted, but only the three
/// well-known tags match the named predicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Local development (the default)
    Development,
    /// Automated test runs
    Test,
    /// Production deployments
    Production,
    /// Any other tag, carried verbatim
    Other(String),
}

impl Environment {
    /// Resolve the environment from the process environment
    ///
    /// An unset or empty `APP_ENV` resolves to `Development`. Unrecognized
    /// values are not an error; they simply match none of the named
    /// predicates.
    pub fn detect() -> Self {
        Self::resolve(env::var(ENVIRONMENT_VAR).ok())
    }

    /// Classify a raw variable value, defaulting absent or empty to
    /// `Development`
    fn resolve(value: Option<String>) -> Self {
        match value {
            Some(value) if !value.is_empty() => Self::from(value.as_str()),
            _ => Environment::Development,
        }
    }

    /// Check if this environment equals the given candidate
    pub fn is(&self, candidate: &Environment) -> bool {
        self == candidate
    }

    /// Check if the environment is `Development`
    pub fn is_development(&self) -> bool {
        self.is(&Environment::Development)
    }

    /// Check if the environment is `Test`
    pub fn is_test(&self) -> bool {
        self.is(&Environment::Test)
    }

    /// Check if the environment is `Production`
    pub fn is_production(&self) -> bool {
        self.is(&Environment::Production)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl From<&str> for Environment {
    fn from(value: &str) -> Self {
        match value {
            "development" => Environment::Development,
            "test" => Environment::Test,
            "production" => Environment::Production,
            other => Environment::Other(other.to_string()),
        }
    }
}

impl From<String> for Environment {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => f.write_str("development"),
            Environment::Test => f.write_str("test"),
            Environment::Production => f.write_str("production"),
            Environment::Other(tag) => f.write_str(tag),
        }
    }
}
