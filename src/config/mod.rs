use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub server: ServerConfig,
    pub uploads: UploadsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadsConfig {
    pub dir: String,
    #[serde(default = "default_max_upload")]
    pub max_upload_size: String,
}

impl UploadsConfig {
    /// Maximum accepted upload size in bytes, parsed from the
    /// human-readable config value ("10MB", "512KB", "1048576").
    pub fn max_upload_bytes(&self) -> u64 {
        parse_size(&self.max_upload_size).unwrap_or(DEFAULT_MAX_UPLOAD_BYTES)
    }
}

pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

pub fn parse_size(value: &str) -> Option<u64> {
    let value = value.trim().to_ascii_uppercase();

    let (number, multiplier) = if let Some(n) = value.strip_suffix("GB") {
        (n.trim(), 1024 * 1024 * 1024)
    } else if let Some(n) = value.strip_suffix("MB") {
        (n.trim(), 1024 * 1024)
    } else if let Some(n) = value.strip_suffix("KB") {
        (n.trim(), 1024)
    } else if let Some(n) = value.strip_suffix('B') {
        (n.trim(), 1)
    } else {
        (value.as_str(), 1)
    };

    number.parse::<u64>().ok().map(|n| n * multiplier)
}

fn default_language() -> String {
    "en".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_upload() -> String {
    "10MB".to_string()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!(
                "Could not read config file '{}': {}. Are you in a Traveler site directory?",
                path.display(),
                e
            )
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.uploads.dir.trim().is_empty() {
            anyhow::bail!("uploads.dir must not be empty");
        }
        match parse_size(&self.uploads.max_upload_size) {
            None => anyhow::bail!(
                "uploads.max_upload_size '{}' is not a valid size (expected e.g. \"10MB\")",
                self.uploads.max_upload_size
            ),
            Some(0) => anyhow::bail!("uploads.max_upload_size must be greater than 0"),
            Some(_) => {}
        }
        Ok(())
    }
}
