use crate::error::Result;
use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

pub const ENV_PREFIX: &str = "DISCOCLI";
pub const DEFAULT_API_BASE_URL: &str = "https://api.foojay.io/disco";
const DEFAULT_API_TIMEOUT_SECS: u64 = 10;
const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 300;
const DEFAULT_DISTRIBUTION: &str = "zulu";

/// Runtime settings. Read from `DISCOCLI_*` environment variables only;
/// there is no configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub download: DownloadConfig,

    #[serde(default = "default_distribution")]
    pub default_distribution: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_base_url")]
    pub base_url: String,

    #[serde(default = "default_api_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadConfig {
    #[serde(default = "default_download_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DiscoConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            download: DownloadConfig::default(),
            default_distribution: default_distribution(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_DOWNLOAD_TIMEOUT_SECS,
        }
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_api_timeout_secs() -> u64 {
    DEFAULT_API_TIMEOUT_SECS
}

fn default_download_timeout_secs() -> u64 {
    DEFAULT_DOWNLOAD_TIMEOUT_SECS
}

fn default_distribution() -> String {
    DEFAULT_DISTRIBUTION.to_string()
}

impl DiscoConfig {
    pub fn api_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    pub fn download_timeout(&self) -> Duration {
        Duration::from_secs(self.download.timeout_secs)
    }

    /// Loads the settings from the given variables instead of the process
    /// environment.
    pub fn from_env_map(vars: HashMap<String, String>) -> Result<Self> {
        load(Some(vars))
    }
}

/// Loads the settings from the process environment.
pub fn new_disco_config() -> Result<DiscoConfig> {
    load(None)
}

fn load(vars: Option<HashMap<String, String>>) -> Result<DiscoConfig> {
    // DISCOCLI_API__TIMEOUT_SECS -> api.timeout_secs
    let environment = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .source(vars);

    let config: DiscoConfig = Config::builder()
        .add_source(environment)
        .build()?
        .try_deserialize()?;

    log::debug!(
        "Loaded config: api={} (timeout {}s), download timeout {}s, default distribution {}",
        config.api.base_url,
        config.api.timeout_secs,
        config.download.timeout_secs,
        config.default_distribution
    );

    Ok(config)
}
