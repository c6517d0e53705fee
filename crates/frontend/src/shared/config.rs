//! Client configuration
//!
//! A default configuration is embedded in the bundle. A deployment can
//! override it by storing a complete TOML document in
//! `localStorage["app_config"]`.

use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Backend port on the same host the page was served from
    pub port: u16,
    /// Path prefix of every REST resource
    pub prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SessionConfig {
    /// localStorage key holding the signed-in person
    pub storage_key: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationsConfig {
    /// Success notices are dismissed after this many milliseconds
    pub success_timeout_ms: u32,
}

const CONFIG_OVERRIDE_KEY: &str = "app_config";

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000
prefix = "/api"

[session]
storage_key = "persona_sesion"

[notifications]
success_timeout_ms = 4000
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

pub fn parse_config(text: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(text)
}

fn default_config() -> Config {
    match parse_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            // Only reachable if DEFAULT_CONFIG is edited into an invalid document.
            log::error!("Embedded configuration is invalid: {}", e);
            Config {
                api: ApiConfig {
                    port: 3000,
                    prefix: "/api".into(),
                },
                session: SessionConfig {
                    storage_key: "persona_sesion".into(),
                },
                notifications: NotificationsConfig {
                    success_timeout_ms: 4000,
                },
            }
        }
    }
}

fn stored_override() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(CONFIG_OVERRIDE_KEY)
        .ok()?
}

/// Load configuration
///
/// Search order:
/// 1. `localStorage["app_config"]`
/// 2. Falls back to embedded default config
pub fn load_config() -> Config {
    if let Some(text) = stored_override() {
        match parse_config(&text) {
            Ok(config) => {
                log::info!("Using configuration override from localStorage");
                return config;
            }
            Err(e) => log::warn!("Ignoring invalid configuration override: {}", e),
        }
    }

    log::info!("Using default embedded configuration");
    default_config()
}

/// Process-wide configuration, loaded on first access
pub fn config() -> &'static Config {
    CONFIG.get_or_init(load_config)
}
