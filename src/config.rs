use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::branding::{Branding, ColorMode};
use crate::categorize::DEFAULT_RESULT_CAP;
use crate::recent::DEFAULT_MAX_KEYWORDS;
use crate::wallet::WalletConfig;

const DEFAULT_API_URL: &str = "https://eth.blockscout.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Explorer API root, e.g. `https://eth.blockscout.com`
    pub api_url: String,
    /// Explorer UI root for routes; falls back to `api_url`
    pub explorer_url: Option<String>,
    pub network_name: String,
    /// App directory JSON; apps are left out of search when unset
    pub marketplace_config_url: Option<String>,
    pub debounce_ms: u64,
    pub max_recent_keywords: usize,
    pub result_cap: usize,
    pub request_timeout_secs: u64,
    pub color_mode: ColorMode,
    pub branding: Branding,
    pub wallet: WalletConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            explorer_url: None,
            network_name: "Ethereum".to_string(),
            marketplace_config_url: None,
            debounce_ms: 300,
            max_recent_keywords: DEFAULT_MAX_KEYWORDS,
            result_cap: DEFAULT_RESULT_CAP,
            request_timeout_secs: 10,
            color_mode: ColorMode::default(),
            branding: Branding::default(),
            wallet: WalletConfig::default(),
        }
    }
}

impl Config {
    /// Returns the config directory path (~/.config/qsearch on Linux)
    fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join("qsearch"))
            .context("Could not determine config directory")
    }

    /// Returns the config file path
    fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from disk, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {path:?}"))?;

        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse config file")
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {dir:?}"))?;

        let path = Self::config_path()?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config to {path:?}"))?;

        Ok(())
    }

    pub fn explorer_url(&self) -> &str {
        self.explorer_url.as_deref().unwrap_or(&self.api_url)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
