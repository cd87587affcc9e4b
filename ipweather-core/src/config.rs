use std::{fs, path::Path, path::PathBuf, time::Duration};

use directories::ProjectDirs;
use reqwest::Url;
use serde::Deserialize;

use crate::errors::{CliError, Result};

/// Network timeouts applied to every outbound call.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Connect timeout in milliseconds, must be at least 1.
    pub connect_timeout_ms: u64,
    /// Read/response timeout in milliseconds, must be at least 1.
    pub read_timeout_ms: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { connect_timeout_ms: 2000, read_timeout_ms: 2000 }
    }
}

impl NetworkConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}

/// Base URLs of the two upstream services.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub ip_geo_base_url: String,
    pub open_meteo_base_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            ip_geo_base_url: "http://ip-api.com/json".to_string(),
            open_meteo_base_url: "https://api.open-meteo.com/v1/forecast".to_string(),
        }
    }
}

impl EndpointConfig {
    /// Parsed IP geolocation base URL.
    pub fn ip_geo_url(&self) -> Result<Url> {
        parse_base_url("ip_geo_base_url", &self.ip_geo_base_url)
    }

    /// Parsed Open-Meteo base URL.
    pub fn open_meteo_url(&self) -> Result<Url> {
        parse_base_url("open_meteo_base_url", &self.open_meteo_base_url)
    }
}

fn parse_base_url(field: &str, value: &str) -> Result<Url> {
    Url::parse(value)
        .map_err(|e| CliError::validation(format!("invalid {field} '{value}': {e}")))
}

/// Top-level configuration, read from an optional TOML file.
///
/// Example:
/// ```toml
/// [network]
/// connect_timeout_ms = 2000
/// read_timeout_ms = 2000
///
/// [endpoints]
/// ip_geo_base_url = "http://ip-api.com/json"
/// open_meteo_base_url = "https://api.open-meteo.com/v1/forecast"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub endpoints: EndpointConfig,
}

impl Config {
    /// Load config from the platform config directory, or return defaults if
    /// no file exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    /// Load config from an explicit path; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            let message = format!("failed to read config file {}: {e}", path.display());
            CliError::io_with_source(message, e)
        })?;

        let cfg: Config = toml::from_str(&contents).map_err(|e| {
            CliError::validation(format!("failed to parse config file {}: {e}", path.display()))
        })?;

        cfg.validate()?;
        Ok(cfg)
    }

    /// Check the bounds and URL syntax the rest of the tool relies on.
    pub fn validate(&self) -> Result<()> {
        if self.network.connect_timeout_ms < 1 {
            return Err(CliError::validation("network.connect_timeout_ms must be at least 1"));
        }
        if self.network.read_timeout_ms < 1 {
            return Err(CliError::validation("network.read_timeout_ms must be at least 1"));
        }
        self.endpoints.ip_geo_url()?;
        self.endpoints.open_meteo_url()?;
        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "ipweather", "ipweather-cli")
            .ok_or_else(|| CliError::runtime("could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
