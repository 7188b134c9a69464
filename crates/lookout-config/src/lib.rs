//! # lookout-config
//!
//! Layered configuration loading for lookout-admin using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LOOKOUT_*` prefix, `__` as separator)
//! 2. The bare `SERVER_URL` environment variable
//! 3. Project-level `.lookout/config.toml`
//! 4. User-level `~/.config/lookout/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LOOKOUT_SERVER__URL` -> `server.url`, `LOOKOUT_AUTH__STORE` -> `auth.store`, etc.
//! `SERVER_URL` is accepted as a shorthand for `server.url`.
//!
//! # Usage
//!
//! ```no_run
//! use lookout_config::LookoutConfig;
//!
//! let config = LookoutConfig::load_with_dotenv().expect("config");
//! println!("server: {}", config.server.base_url());
//! ```

mod auth;
mod error;
mod general;
mod server;

pub use auth::{AuthConfig, StoreKind};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use server::{DEFAULT_SERVER_URL, ServerConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LookoutConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LookoutConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or the server URL is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration, letting an explicit server URL (the `--server-url`
    /// flag) beat every other source.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_server_override(server_url: Option<&str>) -> Result<Self, ConfigError> {
        let mut figment = Self::figment();
        if let Some(url) = server_url {
            figment = figment.merge(Serialized::default("server.url", url));
        }
        Self::extract(figment)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".lookout/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: bare SERVER_URL
        figment = figment.merge(
            Env::raw()
                .only(&["SERVER_URL"])
                .map(|_| "server.url".into()),
        );

        // Layer 4: prefixed environment variables (highest priority)
        figment.merge(Env::prefixed("LOOKOUT_").split("__"))
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.server.validate()?;
        Ok(config)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lookout").join("config.toml"))
    }
}
