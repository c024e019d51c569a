//! Configuration file support
//!
//! Loads optional settings from ~/.mathtext/config.toml. Values resolve as
//! CLI args > env vars (handled by clap) > config file > defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::primitives::DEFAULT_REQUEST_TIMEOUT_SECS;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Settings read from the config file; every field is optional
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Bind address
    pub host: Option<String>,

    /// Listen port
    pub port: Option<u16>,

    /// Per-request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

impl Config {
    /// Load config from ~/.mathtext/config.toml, falling back to defaults
    pub fn load() -> Self {
        let path = config_path();
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config file: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load and parse a specific config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }
}

/// Get the config file path
pub fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".mathtext")
        .join("config.toml")
}

/// Fully resolved server settings
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    /// Merge explicit overrides (CLI/env) over the file config and defaults
    pub fn resolve(
        host: Option<String>,
        port: Option<u16>,
        request_timeout_secs: Option<u64>,
        file: Config,
    ) -> Self {
        let defaults = Self::default();
        Self {
            host: host.or(file.host).unwrap_or(defaults.host),
            port: port.or(file.port).unwrap_or(defaults.port),
            request_timeout: request_timeout_secs
                .or(file.request_timeout_secs)
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.host.is_none());
        assert!(config.port.is_none());
    }

    #[test]
    fn test_config_path() {
        let path = config_path();
        assert!(path.to_string_lossy().contains(".mathtext"));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "host = \"127.0.0.1\"\nport = 9000").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(config.port, Some(9000));
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_load_from_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = \"not a number\"").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }

    #[test]
    fn test_resolve_precedence() {
        let file = Config {
            host: Some("10.0.0.1".to_string()),
            port: Some(9000),
            request_timeout_secs: None,
        };
        let resolved = ServerConfig::resolve(None, Some(7000), None, file);
        assert_eq!(resolved.host, "10.0.0.1");
        assert_eq!(resolved.port, 7000);
        assert_eq!(resolved.request_timeout, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    }

    #[test]
    fn test_resolve_defaults() {
        assert_eq!(
            ServerConfig::resolve(None, None, None, Config::default()),
            ServerConfig::default()
        );
    }
}
