//! Configuration module for kukui.
//!
//! Container tuning and logging settings can be loaded from files (TOML,
//! YAML, JSON) and overridden with environment variables. All configuration
//! values are validated before use.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::data_structures::trie_map::TrieMapConfig;
use crate::data_structures::worklists::WorkListConfig;
use crate::error::config::ConfigError;
use crate::error::KukuiResult;

pub mod containers;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default configuration location
const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "KUKUI";

/// Initialize the default configuration.
///
/// This loads the default configuration file and merges it with any environment variables.
/// A missing file is not an error; built-in defaults are used instead.
///
/// # Returns
///
/// * `Ok(())` if the configuration was successfully initialized
/// * `Err(ConfigError)` if the file or environment held an invalid configuration
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

/// Main configuration for kukui.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KukuiConfig {
    /// Trie map configuration
    pub trie_map: TrieMapConfig,

    /// Worklist configuration
    pub worklists: WorkListConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for KukuiConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.trie_map.validate()?;
        self.worklists.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
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
            level: "info".to_string(),
            json: false,
            source_location: true,
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

/// Configuration loader for kukui.
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

    /// Loads the configuration from defaults, the file and environment variables,
    /// in increasing order of precedence.
    ///
    /// # Returns
    ///
    /// * `Ok(KukuiConfig)` if the configuration was loaded and validated
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<KukuiConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&KukuiConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let name = path
                .to_str()
                .ok_or_else(|| ConfigError::ParseError(format!("Non UTF-8 path: {path:?}")))?;
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
            builder = builder.add_source(File::with_name(name).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            ExternalConfigError::FileParse { cause, .. } => {
                ConfigError::ParseError(cause.to_string())
            }
            other => ConfigError::ParseError(other.to_string()),
        })?;

        let kukui_config: KukuiConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        kukui_config.validate()?;
        tracing::debug!(config = ?kukui_config, "configuration loaded");

        Ok(kukui_config)
    }
}

/// Writes `config` to `path`, as JSON when the extension is `json` and as
/// TOML otherwise.
pub fn write_config<P: AsRef<Path>>(config: &KukuiConfig, path: P) -> KukuiResult<()> {
    let path = path.as_ref();
    let rendered = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::to_string_pretty(config)?,
        _ => toml::to_string_pretty(config)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?,
    };
    std::fs::write(path, rendered)?;
    Ok(())
}

/// Process-wide configuration.
static GLOBAL_CONFIG: OnceCell<Arc<KukuiConfig>> = OnceCell::new();

/// Initialize the global configuration.
///
/// Only the first call takes effect.
///
/// # Returns
///
/// `true` if this call installed the configuration.
pub fn init_global_config(config: KukuiConfig) -> bool {
    let installed = GLOBAL_CONFIG.set(Arc::new(config)).is_ok();
    if !installed {
        tracing::warn!("Global configuration was already initialized, ignoring new configuration");
    }
    installed
}

/// Get the global configuration, if it has been initialized.
pub fn get_global_config() -> Option<Arc<KukuiConfig>> {
    GLOBAL_CONFIG.get().cloned()
}
