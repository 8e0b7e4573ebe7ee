//! Configuration loading module
//!
//! This module handles locating the configuration file, parsing it with
//! environment-variable overrides, and caching the parsed result for the
//! lifetime of the loader.

use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::environment::Environment;
use crate::settings::AppConfig;
use crate::shared::error::{ConfigError, ConfigResult};

/// Prefix of environment variables that override configuration fields
pub const ENV_OVERRIDE_PREFIX: &str = "APP";

/// Separator for nested field overrides, e.g. `APP_HTTP__PORT`
const ENV_OVERRIDE_SEPARATOR: &str = "__";

/// Default configuration file, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.yml";

/// Configuration loader and cache
///
/// One loader is constructed at process start and shared by reference; the
/// configuration file must be set before the first [`get_config`] call, as
/// later changes cannot affect the already-cached value.
///
/// [`get_config`]: ConfigLoader::get_config
#[derive(Debug)]
pub struct ConfigLoader {
    environment: Environment,
    config_file: PathBuf,
    env_overrides: Option<config::Map<String, String>>,
    loaded: OnceCell<AppConfig>,
}

impl ConfigLoader {
    /// Create a loader for the given environment with the default file path
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
            env_overrides: None,
            loaded: OnceCell::new(),
        }
    }

    /// Create a loader with the environment resolved from `APP_ENV`
    pub fn from_process_env() -> Self {
        Self::new(Environment::detect())
    }

    /// Resolved environment of this loader
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Currently configured configuration file path
    pub fn configuration_file(&self) -> &Path {
        &self.config_file
    }

    /// Set the path to the configuration file to load
    ///
    /// Relative paths are resolved against the current working directory and
    /// must reference an existing file. Absolute paths are stored without an
    /// existence check. Has no effect on [`get_config`] once a configuration
    /// has already been loaded.
    ///
    /// [`get_config`]: ConfigLoader::get_config
    pub fn set_configuration_file(&mut self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        if path.is_absolute() {
            self.config_file = path.to_path_buf();
            return Ok(());
        }

        let base = std::env::current_dir().map_err(|source| ConfigError::PathResolution {
            path: path.to_path_buf(),
            source,
        })?;
        self.set_relative_configuration_file(&base, path)
    }

    /// Resolve a relative path against `base` and store it if it exists
    fn set_relative_configuration_file(&mut self, base: &Path, path: &Path) -> ConfigResult<()> {
        let resolved = base.join(path);
        if !resolved.exists() {
            return Err(ConfigError::FileNotFound { path: resolved });
        }
        self.config_file = resolved;
        Ok(())
    }

    /// Return the configuration, loading and caching it on first access
    ///
    /// The load runs at most once even under concurrent first access; failed
    /// loads are not cached, so a later call can retry with a corrected path
    /// or file.
    pub fn get_config(&self) -> ConfigResult<&AppConfig> {
        self.loaded.get_or_try_init(|| self.load())
    }

    fn load(&self) -> ConfigResult<AppConfig> {
        let verbose = !self.environment.is_production();
        if verbose {
            debug!(
                path = %self.config_file.display(),
                environment = %self.environment,
                "Loading configuration file"
            );
        }

        // The key separator also becomes the prefix separator unless set
        // explicitly, and override keys are APP_DEBUG, not APP__DEBUG.
        let mut env_source = config::Environment::with_prefix(ENV_OVERRIDE_PREFIX)
            .prefix_separator("_")
            .separator(ENV_OVERRIDE_SEPARATOR)
            .try_parsing(true);
        if let Some(overrides) = &self.env_overrides {
            env_source = env_source.source(Some(overrides.clone()));
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(self.config_file.clone()).format(config::FileFormat::Yaml))
            .add_source(env_source)
            .build()
            .map_err(|source| ConfigError::Load {
                path: self.config_file.clone(),
                source,
            })?;

        let parsed: AppConfig = settings
            .try_deserialize()
            .map_err(|source| ConfigError::Load {
                path: self.config_file.clone(),
                source,
            })?;

        if verbose {
            debug!(config = ?parsed, "Configuration loaded");
        }
        Ok(parsed)
    }

    /// Replace the process environment with a fixed override map
    #[cfg(test)]
    fn with_env_overrides(mut self, overrides: config::Map<String, String>) -> Self {
        self.env_overrides = Some(overrides);
        self
    }
}
