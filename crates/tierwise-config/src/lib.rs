//! Configuration system for Tierwise.
//!
//! Load and persist [`PricingConfig`] as TOML, YAML or JSON, and retrieve the
//! current configuration through pluggable stores with fallback to defaults.
//!
//! # Examples
//!
//! Load pricing rules from a TOML string:
//!
//! ```
//! use tierwise_config::PricingConfigExt;
//! use tierwise_core::PricingConfig;
//!
//! let config = PricingConfig::from_toml_str(r#"
//!     netNewListPrice = 240.0
//!
//!     [[renewalRules]]
//!     minCurrentPpl = 0.0
//!     maxCurrentPpl = 119.0
//!     lowestAllowedPrice = 180.0
//!
//!     [[renewalRules]]
//!     minCurrentPpl = 120.0
//!     lowestAllowedPrice = 200.0
//! "#).unwrap();
//!
//! assert_eq!(config.net_new_list_price, 240.0);
//! assert_eq!(config.renewal_rules.len(), 2);
//! assert_eq!(config.renewal_rules[1].max_current_ppl, None);
//! // Missing families fall back to the defaults.
//! assert_eq!(config.net_new_volume_rules.len(), 5);
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use tierwise_config::PricingConfigExt;
//! use tierwise_core::PricingConfig;
//!
//! let config = PricingConfig::load("pricing.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use thiserror::Error;
use tierwise_core::PricingConfig;

mod raw;
mod store;

#[cfg(test)]
mod tests;

pub use raw::RawPricingConfig;
pub use store::{
    get_current_config, CachedConfigSource, ConfigSource, ConfigStore, FileConfigStore,
    MemoryConfigStore,
};

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    #[error("No pricing configuration stored")]
    Missing,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Configuration store unavailable: {0}")]
    Unavailable(String),
}

/// On-disk format of a pricing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detects the format from a file extension (`toml`, `yaml`/`yml`, `json`).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            Some("json") => Ok(ConfigFormat::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Parses a configuration in this format, filling gaps with defaults.
    pub fn parse(self, s: &str) -> Result<PricingConfig, ConfigError> {
        let raw: RawPricingConfig = match self {
            ConfigFormat::Toml => toml::from_str(s)?,
            ConfigFormat::Yaml => serde_yaml::from_str(s)?,
            ConfigFormat::Json => serde_json::from_str(s)?,
        };
        Ok(raw.into_config())
    }

    /// Serializes a configuration in this format.
    pub fn render(self, config: &PricingConfig) -> Result<String, ConfigError> {
        Ok(match self {
            ConfigFormat::Toml => toml::to_string_pretty(config)?,
            ConfigFormat::Yaml => serde_yaml::to_string(config)?,
            ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        })
    }
}

/// File and string loaders for [`PricingConfig`].
///
/// All loaders are lenient in the same way: a missing or non-finite list
/// price and missing rule arrays are replaced by the defaults. Rules
/// themselves are not validated here.
pub trait PricingConfigExt: Sized {
    /// Loads configuration from a file, picking the format by extension.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, has an unknown extension, or
    /// fails to parse.
    fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError>;

    /// Parses configuration from a TOML string.
    fn from_toml_str(s: &str) -> Result<Self, ConfigError>;

    /// Parses configuration from a YAML string.
    fn from_yaml_str(s: &str) -> Result<Self, ConfigError>;

    /// Parses configuration from a JSON string.
    fn from_json_str(s: &str) -> Result<Self, ConfigError>;

    /// Serializes to pretty-printed JSON, the stored representation.
    fn to_json_string(&self) -> Result<String, ConfigError>;
}

impl PricingConfigExt for PricingConfig {
    fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(&path)?;
        let contents = std::fs::read_to_string(path)?;
        format.parse(&contents)
    }

    fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        ConfigFormat::Toml.parse(s)
    }

    fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        ConfigFormat::Yaml.parse(s)
    }

    fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        ConfigFormat::Json.parse(s)
    }

    fn to_json_string(&self) -> Result<String, ConfigError> {
        ConfigFormat::Json.render(self)
    }
}
