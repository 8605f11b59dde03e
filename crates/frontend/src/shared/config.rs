use leptos::prelude::*;
use serde::Deserialize;

use super::api_utils::window_api_base;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub lists: ListsConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Explicit API origin; when absent the current host is used with `port`
    #[serde(default)]
    pub base_url: Option<String>,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListsConfig {
    pub page_size_options: Vec<u32>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    /// Prefix of every local storage key the dashboard writes
    pub namespace: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000

[lists]
page_size_options = [20, 50, 80, 100, 200]

[storage]
namespace = "freight_desk"

[logging]
level = "debug"
"#;

/// Local storage key holding an optional TOML override
pub const CONFIG_OVERRIDE_KEY: &str = "freight_desk_config";

impl AppConfig {
    pub fn log_level(&self) -> log::Level {
        self.logging.level.trim().parse().unwrap_or(log::Level::Info)
    }

    pub fn api_base(&self) -> String {
        resolve_api_base(self.api.base_url.as_deref(), || window_api_base(self.api.port))
    }
}

/// Load configuration
///
/// Search order:
/// 1. The override document, when present and valid
/// 2. Falls back to the embedded default config
pub fn load_config(override_toml: Option<&str>) -> Result<AppConfig, toml::de::Error> {
    if let Some(raw) = override_toml.filter(|raw| !raw.trim().is_empty()) {
        match toml::from_str::<AppConfig>(raw) {
            Ok(config) => {
                log::info!("Using configuration override from {}", CONFIG_OVERRIDE_KEY);
                return Ok(config);
            }
            Err(e) => log::warn!("Ignoring invalid {}: {}", CONFIG_OVERRIDE_KEY, e),
        }
    }
    toml::from_str(DEFAULT_CONFIG)
}

/// Explicit base URL wins; otherwise the window-derived origin.
pub fn resolve_api_base(explicit: Option<&str>, from_window: impl FnOnce() -> String) -> String {
    match explicit.map(str::trim).filter(|base| !base.is_empty()) {
        Some(base) => base.trim_end_matches('/').to_string(),
        None => from_window(),
    }
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not provided in context")
}
