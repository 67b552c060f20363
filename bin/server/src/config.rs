//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from environment variables. Nested keys
//! use a double underscore, e.g. `OPENAI__API_KEY` or
//! `ROUTER__STYLIST_ENABLED`.
//!
//! See [`OpenAiConfig`], [`WeatherConfig`] and [`RouterConfig`] for the
//! library-level settings.

use serde::Deserialize;
use talking_bot_ai::OpenAiConfig;
use talking_bot_conversation::RouterConfig;
use talking_bot_weather::WeatherConfig;

/// Server configuration composed from library configs.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Chit-chat language model.
    pub openai: OpenAiConfig,

    /// Weather provider.
    pub weather: WeatherConfig,

    /// Dialogue router behavior.
    #[serde(default)]
    pub router: RouterConfig,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
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
