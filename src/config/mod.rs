//! Configuration module for Olelo.
//!
//! This module provides a configuration system that can load settings
//! from files (TOML, YAML, JSON) and override them with environment variables.
//! All configuration values are validated for correctness before use.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::config::ConfigError;
use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

pub mod restore;
pub mod trie;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default configuration location
const DEFAULT_CONFIG_PATH: &str = "olelo.toml";

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "OLELO";

/// Initialize the default configuration for Olelo.
///
/// This loads the default configuration file and merges it with any environment variables.
/// A missing default file is not an error; the built-in defaults are used instead.
///
/// # Returns
///
/// * `Ok(())` if the configuration was successfully initialized
/// * `Err(ConfigError)` if there was an error initializing the configuration
pub fn init_default_config() -> ConfigResult<()> {
    let loader = ConfigLoader::new(Some(DEFAULT_CONFIG_PATH), ENV_PREFIX);

    let config = match loader.load() {
        Ok(config) => config,
        Err(ConfigError::FileNotFound(_)) => {
            tracing::warn!(
                "Default configuration file not found at: {}",
                DEFAULT_CONFIG_PATH
            );
            ConfigLoader::new(None::<&Path>, ENV_PREFIX).load()?
        }
        Err(e) => return Err(e),
    };

    init_global_config(config);

    Ok(())
}

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for Olelo.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OleloConfig {
    /// Dictionary trie configuration
    pub trie: trie::TrieConfig,

    /// Text restoration configuration
    pub restore: restore::RestoreConfig,

    /// Keyword file configuration
    pub keywords: KeywordsConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for OleloConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.trie.validate()?;
        self.restore.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Keyword file configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KeywordsConfig {
    /// Keyword list used when none is given on the command line
    pub path: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
            source_location: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for Olelo.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from defaults, a file and environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(OleloConfig)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<OleloConfig> {
        let mut builder = Config::builder();

        // Add default configuration values
        builder = builder.add_source(
            Config::try_from(&OleloConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        // Add configuration from file if provided
        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        // Add environment variables with prefix
        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        let olelo_config: OleloConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        olelo_config.validate()?;

        Ok(olelo_config)
    }
}

/// Process-wide configuration.
static GLOBAL_CONFIG: OnceCell<Arc<OleloConfig>> = OnceCell::new();

/// Initialize the global configuration.
///
/// # Arguments
///
/// * `config` - The configuration to set as global
pub fn init_global_config(config: OleloConfig) {
    if GLOBAL_CONFIG.set(Arc::new(config)).is_err() {
        tracing::warn!("Global configuration was already initialized, ignoring new configuration");
    }
}

/// Get the global configuration, falling back to the defaults when it was
/// never initialized.
pub fn get_global_config() -> Arc<OleloConfig> {
    GLOBAL_CONFIG
        .get_or_init(|| Arc::new(OleloConfig::default()))
        .clone()
}
