//! Lookout server connection settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Base URL used when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

fn default_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Base URL of the lookout web server (`SERVER_URL`).
    #[serde(default = "default_url")]
    pub url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

impl ServerConfig {
    /// Base URL without trailing slashes, so paths can be appended directly.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Reject URLs the HTTP client cannot use.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the URL is empty or has no
    /// `http://` / `https://` scheme.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url();
        if url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.url".into(),
                reason: "must not be empty".into(),
            });
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "server.url".into(),
                reason: format!("'{url}' must start with http:// or https://"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_server() {
        let config = ServerConfig::default();
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn base_url_trims_trailing_slashes() {
        let config = ServerConfig {
            url: "https://lookout.example.com//".into(),
        };
        assert_eq!(config.base_url(), "https://lookout.example.com");
    }

    #[test]
    fn validate_rejects_missing_scheme() {
        let config = ServerConfig {
            url: "lookout.example.com".into(),
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server.url"));
    }

    #[test]
    fn validate_rejects_empty() {
        let config = ServerConfig { url: "/".into() };
        assert!(config.validate().is_err());
    }
}
