//! Storefront settings.
//!
//! Values come from three layers, later ones winning:
//! 1. [`StorefrontConfig::default`]
//! 2. an optional TOML file ([`StorefrontConfig::from_toml_str`], [`StorefrontConfig::load`])
//! 3. environment overrides ([`StorefrontConfig::apply_env`])
//!
//! ```toml
//! business_name = "Cookie Menace"
//! instagram_handle = "cookie_menace"
//! delivery_cutoff_hour = 18
//! ```

use crate::order::{DEFAULT_CUTOFF_HOUR, DEFAULT_GREETING_NAME};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Environment variable naming a TOML config file.
pub const CONFIG_PATH_ENV: &str = "COOKIE_MENACE_CONFIG";
/// Environment variable overriding the delivery cutoff hour.
pub const CUTOFF_HOUR_ENV: &str = "COOKIE_MENACE_CUTOFF_HOUR";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub business_name: String,
    pub tagline: String,
    /// Name the order message greets, e.g. "Hi CookieMenace!".
    pub greeting_name: String,
    pub instagram_handle: String,
    pub dm_link: String,
    /// Local hour (0-23) from which next-day delivery is closed.
    pub delivery_cutoff_hour: u32,
    pub delivery_area: String,
    /// Command queue depth of the cart actor.
    pub cart_buffer: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            business_name: "Cookie Menace".to_string(),
            tagline: "Homemade cookies that spark joy".to_string(),
            greeting_name: DEFAULT_GREETING_NAME.to_string(),
            instagram_handle: "cookie_menace".to_string(),
            dm_link: "https://ig.me/m/cookie_menace".to_string(),
            delivery_cutoff_hour: DEFAULT_CUTOFF_HOUR,
            delivery_area: "Bangalore".to_string(),
            cart_buffer: 32,
        }
    }
}

impl StorefrontConfig {
    /// Parses TOML; missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        info!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    /// Full layering: defaults, then the file named by
    /// `COOKIE_MENACE_CONFIG` if set, then environment overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load(PathBuf::from(path))?,
            None => Self::default(),
        };
        base.apply_env(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup` (normally `std::env::var`).
    pub fn apply_env(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(raw) = lookup(CUTOFF_HOUR_ENV) {
            self.delivery_cutoff_hour = raw.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("{} must be an hour, got {:?}", CUTOFF_HOUR_ENV, raw))
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.delivery_cutoff_hour > 23 {
            return Err(ConfigError::Invalid(format!(
                "delivery_cutoff_hour must be 0-23, got {}",
                self.delivery_cutoff_hour
            )));
        }
        if self.cart_buffer == 0 {
            return Err(ConfigError::Invalid("cart_buffer must be at least 1".to_string()));
        }
        Ok(())
    }

    /// `@cookie_menace`
    pub fn instagram_display(&self) -> String {
        format!("@{}", self.instagram_handle)
    }
}
