//! Client configuration and its layered sources.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default origin of the speech API.
pub const DEFAULT_BASE_URL: &str = "https://api.sarvam.ai";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "SARVAM_API_KEY";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "SARVAM_BASE_URL";

/// Errors that can occur while building a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("API key is required and cannot be empty")]
    MissingApiKey,

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config file error: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Immutable client configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    api_key: String,
    base_url: String,
}

impl Config {
    /// Create a configuration against the default base URL.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a configuration against a custom base URL.
    ///
    /// Trailing slashes are trimmed from the URL.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let base_url = base_url.into();
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            api_key,
            base_url: base_url.to_string(),
        })
    }

    /// Resolve a configuration from its sources, later sources winning:
    /// config file, then environment, then explicit values.
    pub fn resolve(
        file: Option<ConfigFile>,
        env: Overrides,
        explicit: Overrides,
    ) -> Result<Self, ConfigError> {
        let file = file.unwrap_or_default();

        let api_key = explicit
            .api_key
            .or(env.api_key)
            .or(file.api_key)
            .ok_or(ConfigError::MissingApiKey)?;
        let base_url = explicit
            .base_url
            .or(env.base_url)
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self::with_base_url(api_key, base_url)
    }

    /// Load the configuration from `~/.sarvam-tts/config.json` (if present) and
    /// the environment, with `explicit` values taking precedence.
    pub fn load(explicit: Overrides) -> Result<Self, ConfigError> {
        let file = match ConfigFile::default_path() {
            Some(path) if path.exists() => Some(ConfigFile::load_from(&path)?),
            _ => None,
        };

        Self::resolve(file, Overrides::from_env(), explicit)
    }

    /// Returns the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the synthesis endpoint URL.
    pub fn endpoint(&self) -> String {
        format!("{}/text-to-speech", self.base_url)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Optional values supplied by one configuration layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl Overrides {
    /// Read overrides from `SARVAM_API_KEY` and `SARVAM_BASE_URL`.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV).ok().filter(|v| !v.is_empty()),
            base_url: std::env::var(BASE_URL_ENV).ok().filter(|v| !v.is_empty()),
        }
    }
}

/// On-disk configuration file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl ConfigFile {
    /// Default location: `~/.sarvam-tts/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".sarvam-tts").join("config.json"))
    }

    /// Read a config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Write this config file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
