use anyhow::{Context, Result};
use donut_api::{ApiConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

pub const API_KEY_VAR: &str = "DONUTSMP_API";
pub const BASE_URL_VAR: &str = "DONUTSMP_BASE_URL";

/// Bot configuration, read once at startup
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// DonutSMP API key (can also be set via DONUTSMP_API env var)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Log file, truncated on every start
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    /// Filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Maximum number of listings shown per auction search
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("donut-bot.log")
}

fn default_log_level() -> String {
    "donut_bot=debug,donut_api=debug".to_string()
}

fn default_max_results() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            log_file: default_log_file(),
            log_level: default_log_level(),
            max_results: default_max_results(),
        }
    }
}

impl Config {
    /// Get the config file path (~/.config/donut-bot/config.json)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("donut-bot").join("config.json"))
    }

    /// Load config from disk, or return default if not found
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Apply overrides from the process environment
    pub fn with_env(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Environment values take priority over the config file; empty values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |name: &str| lookup(name).filter(|v| !v.is_empty());

        if let Some(key) = lookup(API_KEY_VAR) {
            self.api_key = Some(key);
        }
        if let Some(url) = lookup(BASE_URL_VAR) {
            self.base_url = url;
        }
        self
    }

    /// Client settings, if an API key is available
    pub fn api_config(&self) -> Option<ApiConfig> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .map(|key| ApiConfig::new(key).with_base_url(self.base_url.clone()))
    }

    pub fn init_logging(&self) -> Result<()> {
        let file = File::create(&self.log_file)
            .with_context(|| format!("creating log file {}", self.log_file.display()))?;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
        Ok(())
    }
}
