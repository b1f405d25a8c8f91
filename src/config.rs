use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::Region;
use crate::services::riot::MAX_PAGE_SIZE;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub riot: RiotSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct RiotSettings {
    /// Development or production key; empty means unconfigured
    #[serde(default)]
    pub api_key: String,
    /// Base URL of the regional API, `{region}` is replaced by the routing value
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_versions_url")]
    pub versions_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RiotSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            versions_url: default_versions_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String { "https://{region}.api.riotgames.com".to_string() }
fn default_versions_url() -> String { "https://ddragon.leagueoflegends.com/api/versions.json".to_string() }
fn default_timeout_secs() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default)]
    pub default_region: Region,
    /// Page size of a single match-ID request
    #[serde(default = "default_match_count")]
    pub default_match_count: u32,
    /// Maximum number of matches considered per player
    #[serde(default = "default_max_match_list_size")]
    pub max_match_list_size: u32,
    /// Drop repeated IDs from a player's history before intersecting
    #[serde(default = "default_dedup_history")]
    pub dedup_history: bool,
}

impl MatchingSettings {
    /// Page size actually requested, capped at what the endpoint accepts
    pub fn page_size(&self) -> u32 {
        self.default_match_count.min(MAX_PAGE_SIZE)
    }

    /// Number of history pages requested per player
    pub fn max_match_history_requests(&self) -> u32 {
        self.max_match_list_size
            .checked_div(self.page_size())
            .unwrap_or(0)
    }
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_region: Region::default(),
            default_match_count: default_match_count(),
            max_match_list_size: default_max_match_list_size(),
            dedup_history: default_dedup_history(),
        }
    }
}

fn default_match_count() -> u32 { 100 }
fn default_max_match_list_size() -> u32 { 100 }
fn default_dedup_history() -> bool { true }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with DUO__)
    /// 5. `RIOT_API_KEY`, if set
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., DUO__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("DUO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_api_key_override(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("DUO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_api_key_override(settings)?;

        settings.try_deserialize()
    }
}

/// `RIOT_API_KEY` wins over any configured key
fn apply_api_key_override(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("RIOT_API_KEY") {
        Ok(api_key) if !api_key.trim().is_empty() => Config::builder()
            .add_source(settings)
            .set_override("riot.api_key", api_key)?
            .build(),
        _ => Ok(settings),
    }
}
