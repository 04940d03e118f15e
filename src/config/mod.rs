//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/locations/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where the full location list comes from
    #[serde(default)]
    pub source: SourceConfig,

    /// Free-text search settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Presentation settings
    #[serde(default)]
    pub display: DisplayConfig,

    /// Deep link settings
    #[serde(default)]
    pub deeplink: DeeplinkConfig,
}

/// Location source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// URL of the JSON location list
    #[serde(default = "default_source_url")]
    pub url: String,
}

/// Search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Geocoder base URL
    #[serde(default = "default_geocoder_url")]
    pub geocoder_url: String,

    /// Maximum number of geocoder candidates
    #[serde(default = "default_search_limit")]
    pub limit: usize,

    /// Quiescence period in milliseconds before search text is dispatched
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

/// Display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Name shown for locations that arrive without one
    #[serde(default = "default_unknown_name")]
    pub unknown_name: String,
}

/// Deep link settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeeplinkConfig {
    /// Program invoked with the deep link URL
    #[serde(default = "default_opener")]
    pub opener: String,

    /// URL schemes the opener can resolve
    #[serde(default = "default_schemes")]
    pub schemes: Vec<String>,
}

// Default value functions for serde
fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}
fn default_geocoder_url() -> String {
    DEFAULT_GEOCODER_URL.to_string()
}
fn default_search_limit() -> usize {
    DEFAULT_SEARCH_LIMIT
}
fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}
fn default_unknown_name() -> String {
    DEFAULT_UNKNOWN_NAME.to_string()
}
fn default_opener() -> String {
    DEFAULT_OPENER.to_string()
}
fn default_schemes() -> Vec<String> {
    DEFAULT_SCHEMES.iter().map(|s| s.to_string()).collect()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_source_url(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            geocoder_url: default_geocoder_url(),
            limit: default_search_limit(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            unknown_name: default_unknown_name(),
        }
    }
}

impl Default for DeeplinkConfig {
    fn default() -> Self {
        Self {
            opener: default_opener(),
            schemes: default_schemes(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific path, writing defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read config file: {}", e))
            })?;

            toml::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse config file: {}", e))
            })
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            Error::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, content).map_err(|e| {
            Error::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key". List values are joined with commas.
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["source", "url"] => Some(self.source.url.clone()),

            ["search", "geocoder_url"] => Some(self.search.geocoder_url.clone()),
            ["search", "limit"] => Some(self.search.limit.to_string()),
            ["search", "debounce_ms"] => Some(self.search.debounce_ms.to_string()),

            ["display", "unknown_name"] => Some(self.display.unknown_name.clone()),

            ["deeplink", "opener"] => Some(self.deeplink.opener.clone()),
            ["deeplink", "schemes"] => Some(self.deeplink.schemes.join(",")),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["source", "url"] => {
                self.source.url = value.to_string();
            }

            ["search", "geocoder_url"] => {
                self.search.geocoder_url = value.to_string();
            }
            ["search", "limit"] => {
                self.search.limit = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid limit value: {}", value))
                })?;
            }
            ["search", "debounce_ms"] => {
                self.search.debounce_ms = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid debounce value: {}", value))
                })?;
            }

            ["display", "unknown_name"] => {
                self.display.unknown_name = value.to_string();
            }

            ["deeplink", "opener"] => {
                self.deeplink.opener = value.to_string();
            }
            ["deeplink", "schemes"] => {
                self.deeplink.schemes = value
                    .split(',')
                    .map(|s| s.trim().trim_end_matches("://").to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "source.url",
            "search.geocoder_url",
            "search.limit",
            "search.debounce_ms",
            "display.unknown_name",
            "deeplink.opener",
            "deeplink.schemes",
        ]
    }

    /// Search debounce as a duration
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }
}
