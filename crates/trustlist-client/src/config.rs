//! Lookup configuration
//!
//! This module handles hierarchical configuration loading from multiple sources:
//! - Default configuration file
//! - Environment-specific configuration file
//! - Environment variables

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the trustlist lookups
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// FIO chain API settings
    #[serde(default)]
    pub fio: FioApiConfig,

    /// Safelist API settings
    #[serde(default)]
    pub safelist: SafelistConfig,
}

/// FIO chain API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FioApiConfig {
    /// Base URL of the chain API node
    #[serde(default = "default_fio_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_fio_base_url() -> String {
    "https://fio.blockpane.com".to_string()
}

fn default_timeout() -> u64 {
    5
}

impl Default for FioApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_fio_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Safelist API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafelistConfig {
    /// Base URL the contract address is appended to
    #[serde(default = "default_safelist_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_safelist_base_url() -> String {
    "https://safelist.getaurox.com/api/v1/contracts".to_string()
}

impl Default for SafelistConfig {
    fn default() -> Self {
        Self {
            base_url: default_safelist_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl LookupConfig {
    /// Load configuration from files and environment
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. Default configuration file (config/default.toml)
    /// 2. Environment-specific file (config/{env}.toml)
    /// 3. Environment variables (TRUSTLIST_*)
    ///
    /// # Arguments
    ///
    /// * `config_dir` - Directory containing configuration files
    /// * `environment` - Environment name (development, production, etc.)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed
    pub fn load(config_dir: impl Into<PathBuf>, environment: &str) -> Result<Self, ConfigError> {
        let config_dir = config_dir.into();

        let config = Config::builder()
            // Start with default config
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Add environment-specific config
            .add_source(File::from(config_dir.join(format!("{}.toml", environment))).required(false))
            // Add environment variables with prefix TRUSTLIST
            // e.g., TRUSTLIST_FIO__BASE_URL=https://testnet.fioprotocol.io
            // (prefix split on "_", nested keys on "__")
            .add_source(
                Environment::with_prefix("TRUSTLIST")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration with defaults if files don't exist
    pub fn load_or_default(config_dir: impl Into<PathBuf>, environment: &str) -> Self {
        Self::load(config_dir, environment).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load configuration: {}", e);
            eprintln!("Using default configuration");
            Self::default()
        })
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            fio: FioApiConfig::default(),
            safelist: SafelistConfig::default(),
        }
    }
}

/// Get the current environment name
///
/// Reads from the `ENVIRONMENT` or `ENV` environment variable,
/// defaulting to "development" if not set.
pub fn get_environment() -> String {
    std::env::var("ENVIRONMENT")
        .or_else(|_| std::env::var("ENV"))
        .unwrap_or_else(|_| "development".to_string())
}
