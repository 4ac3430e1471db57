//! Configuration management for ShopMe.
//!
//! Loads configuration from ${SHOPME_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides `api_base_url`.
pub const API_URL_ENV: &str = "SHOPME_API_URL";

/// Returns the default config template with comments.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for ShopMe configuration and data files.
    //!
    //! SHOPME_HOME resolution order:
    //! 1. SHOPME_HOME environment variable (if set)
    //! 2. ~/.config/shopme (default)
    //! 3. ./.shopme when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the ShopMe home directory.
    pub fn shopme_home() -> PathBuf {
        if let Ok(home) = std::env::var("SHOPME_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".shopme"),
            |h| h.join(".config").join("shopme"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        shopme_home().join("config.toml")
    }

    /// Returns the path of the persisted session token.
    pub fn session_path() -> PathBuf {
        shopme_home().join("session.json")
    }

    /// Returns the directory that receives log files.
    pub fn logs_dir() -> PathBuf {
        shopme_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the storefront REST API (no trailing slash required).
    pub api_base_url: String,

    /// Request timeout in seconds (0 keeps the transport default)
    pub request_timeout_secs: u32,
}

impl Config {
    const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Applies the `SHOPME_API_URL` override and an optional explicit one.
    ///
    /// The explicit value (from `--api-url`) wins over the environment.
    #[must_use]
    pub fn with_api_url_override(mut self, explicit: Option<&str>) -> Self {
        let from_env = std::env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty());
        if let Some(url) = explicit.map(str::to_string).or(from_env) {
            self.api_base_url = url.trim().to_string();
        }
        self
    }

    /// Returns the request timeout, or `None` when disabled.
    pub fn request_timeout(&self) -> Option<Duration> {
        if self.request_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(u64::from(self.request_timeout_secs)))
        }
    }

    /// Writes the commented default config to `path`.
    ///
    /// # Errors
    /// Fails if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: Self::DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:5000/api");
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "request_timeout_secs = 15\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:5000/api");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_load_invalid_toml_is_an_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "api_base_url = [").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_init_creates_config_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("api_base_url ="));
        assert!(contents.contains("# request_timeout_secs ="));

        // The template must itself be a loadable config.
        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:5000/api");
    }

    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "").unwrap();

        assert!(Config::init(&config_path).is_err());
    }

    #[test]
    fn test_explicit_api_url_wins() {
        let config = Config::default().with_api_url_override(Some(" http://shop.test/api "));
        assert_eq!(config.api_base_url, "http://shop.test/api");
    }
}
