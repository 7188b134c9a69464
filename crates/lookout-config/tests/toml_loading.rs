//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed cwd and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use lookout_config::{LookoutConfig, StoreKind};
use pretty_assertions::assert_eq;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
url = "https://lookout.example.com"

[auth]
store = "keyring"
credentials_dir = "/var/lib/lookout"
keyring_service = "lookout-admin-test"
callback_addr = "127.0.0.1:4000"
login_timeout_secs = 30

[general]
format = "json"
editor = "nano"
"#,
        )?;

        let config: LookoutConfig = Figment::from(Serialized::defaults(LookoutConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.server.url, "https://lookout.example.com");
        assert_eq!(config.auth.store, StoreKind::Keyring);
        assert_eq!(config.auth.credentials_dir, "/var/lib/lookout");
        assert_eq!(config.auth.keyring_service, "lookout-admin-test");
        assert_eq!(config.auth.callback_addr, "127.0.0.1:4000");
        assert_eq!(config.auth.login_timeout_secs, 30);
        assert_eq!(config.general.format, "json");
        assert_eq!(config.general.editor, "nano");
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[auth]
store = "memory"
"#,
        )?;

        let config: LookoutConfig = Figment::from(Serialized::defaults(LookoutConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.auth.store, StoreKind::Memory);
        assert_eq!(config.server.url, "http://127.0.0.1:8080");
        assert_eq!(config.auth.callback_addr, "127.0.0.1:3000");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
url = "https://from-toml.example.com"
"#,
        )?;
        jail.set_env("LOOKOUT_SERVER__URL", "https://from-env.example.com");

        let config: LookoutConfig = Figment::from(Serialized::defaults(LookoutConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("LOOKOUT_").split("__"))
            .extract()?;

        assert_eq!(config.server.url, "https://from-env.example.com");
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lookout")?;
        jail.create_file(
            ".lookout/config.toml",
            r#"
[server]
url = "https://project.example.com"
"#,
        )?;

        let config = LookoutConfig::load().expect("config loads");
        assert_eq!(config.server.base_url(), "https://project.example.com");
        Ok(())
    });
}

#[test]
fn bare_server_url_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lookout")?;
        jail.create_file(
            ".lookout/config.toml",
            r#"
[server]
url = "https://project.example.com"
"#,
        )?;
        jail.set_env("SERVER_URL", "https://env.example.com");

        let config = LookoutConfig::load().expect("config loads");
        assert_eq!(config.server.base_url(), "https://env.example.com");
        Ok(())
    });
}
