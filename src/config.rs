//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::secondary::SecondarySite;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

/// Application configuration with layered loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Request timeout for kakaku.com, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Request timeout for the secondary marketplaces, in seconds
    #[serde(default = "default_secondary_timeout_secs")]
    pub secondary_timeout_secs: u64,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Secondary marketplaces tried in order when kakaku.com has no price
    #[serde(default)]
    pub fallback: Vec<SecondarySite>,

    /// Overrides the kakaku.com base URL
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_secondary_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            proxy: None,
            timeout_secs: default_timeout_secs(),
            secondary_timeout_secs: default_secondary_timeout_secs(),
            format: OutputFormat::Table,
            fallback: Vec::new(),
            base_url: None,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("parts-price").join("config.toml");
            if user_config.exists() {
                debug!("Found config in user config directory");
                return Self::from_file(user_config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides. Unparsable values are ignored.
    pub fn with_env(mut self) -> Self {
        if let Ok(proxy) = std::env::var("PARTS_PRICE_PROXY") {
            self.proxy = Some(proxy);
        }

        if let Ok(timeout) = std::env::var("PARTS_PRICE_TIMEOUT") {
            match timeout.parse() {
                Ok(secs) => self.timeout_secs = secs,
                Err(_) => warn!("Ignoring PARTS_PRICE_TIMEOUT={}", timeout),
            }
        }

        if let Ok(fallback) = std::env::var("PARTS_PRICE_FALLBACK") {
            match parse_site_list(&fallback) {
                Ok(sites) => self.fallback = sites,
                Err(e) => warn!("Ignoring PARTS_PRICE_FALLBACK: {}", e),
            }
        }

        self
    }

    /// Request timeout for kakaku.com.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Request timeout for the secondary marketplaces.
    pub fn secondary_timeout(&self) -> Duration {
        Duration::from_secs(self.secondary_timeout_secs)
    }
}

/// Parses a comma-separated list such as "rakuten,amazon".
pub fn parse_site_list(list: &str) -> Result<Vec<SecondarySite>, String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}
