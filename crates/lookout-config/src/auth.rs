//! Credential storage and login flow settings.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the session credential is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    /// Plain-text file under `credentials_dir`.
    #[default]
    File,
    /// OS keychain, falling back to the file when unavailable.
    Keyring,
    /// Process memory only; nothing survives exit.
    Memory,
}

impl StoreKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Keyring => "keyring",
            Self::Memory => "memory",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_keyring_service() -> String {
    "lookout-admin".to_string()
}

fn default_callback_addr() -> String {
    "127.0.0.1:3000".to_string()
}

const fn default_login_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Credential backend.
    #[serde(default)]
    pub store: StoreKind,

    /// Directory holding the `token` file. Empty means `~/.lookout`.
    #[serde(default)]
    pub credentials_dir: String,

    /// Keychain service name (override for tests to avoid real credentials).
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,

    /// Address the OAuth provider redirects back to during `login`.
    #[serde(default = "default_callback_addr")]
    pub callback_addr: String,

    /// How long `login` waits for the browser callback.
    #[serde(default = "default_login_timeout_secs")]
    pub login_timeout_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            store: StoreKind::default(),
            credentials_dir: String::new(),
            keyring_service: default_keyring_service(),
            callback_addr: default_callback_addr(),
            login_timeout_secs: default_login_timeout_secs(),
        }
    }
}

impl AuthConfig {
    /// Resolved credentials directory.
    #[must_use]
    pub fn credentials_dir(&self) -> Option<PathBuf> {
        if self.credentials_dir.is_empty() {
            dirs::home_dir().map(|home| home.join(".lookout"))
        } else {
            Some(PathBuf::from(&self.credentials_dir))
        }
    }

    #[must_use]
    pub const fn login_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.login_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = AuthConfig::default();
        assert_eq!(config.store, StoreKind::File);
        assert_eq!(config.keyring_service, "lookout-admin");
        assert_eq!(config.callback_addr, "127.0.0.1:3000");
        assert_eq!(config.login_timeout().as_secs(), 120);
    }

    #[test]
    fn explicit_credentials_dir_wins() {
        let config = AuthConfig {
            credentials_dir: "/tmp/lookout-creds".into(),
            ..Default::default()
        };
        assert_eq!(
            config.credentials_dir(),
            Some(PathBuf::from("/tmp/lookout-creds"))
        );
    }

    #[test]
    fn default_credentials_dir_is_under_home() {
        let config = AuthConfig::default();
        if let Some(dir) = config.credentials_dir() {
            assert!(dir.ends_with(".lookout"));
        }
    }
}
