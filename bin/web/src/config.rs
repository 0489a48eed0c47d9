//! Host configuration.
//!
//! Loaded via the `config` crate from environment variables, using `__`
//! as the nesting separator (for example `PROXY__MAX_BODY_BYTES`).
//! Leptos site options (bind address, asset paths) come from
//! `[package.metadata.leptos]` instead.

use serde::Deserialize;

/// Host configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// Origin of the ReadyBag backend that `/api` requests are forwarded to.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Forwarding settings.
    #[serde(default)]
    pub proxy: ProxyConfig,
}

/// Settings for forwarding `/api` requests.
#[derive(Debug, Clone, Deserialize)]
pub struct ProxyConfig {
    /// Largest request body forwarded, in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_max_body_bytes() -> usize {
    2 * 1024 * 1024
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            proxy: ProxyConfig::default(),
        }
    }
}

impl WebConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
