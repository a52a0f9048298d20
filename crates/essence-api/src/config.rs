//! Storefront configuration.

use essence_commerce::Currency;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading storefront configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Could not read the config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML.
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Storefront client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Base URL of the backend API.
    pub api_base_url: String,
    /// Currency code all prices are quoted in.
    pub currency: String,
    /// Products requested per page.
    pub page_size: u32,
    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:4000/api".to_string(),
            currency: "MXN".to_string(),
            page_size: 12,
            request_timeout_secs: 15,
        }
    }
}

impl StorefrontConfig {
    /// Load config from a TOML file.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })?;
        Ok(config.with_env_overrides())
    }

    /// Apply `ESSENCE_*` environment overrides.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("ESSENCE_API_BASE_URL") {
            self.api_base_url = url;
        }
        if let Ok(currency) = std::env::var("ESSENCE_CURRENCY") {
            self.currency = currency;
        }
        self
    }

    /// The configured currency, falling back to the default for unknown codes.
    pub fn currency(&self) -> Currency {
        Currency::from_code(&self.currency).unwrap_or_default()
    }
}
