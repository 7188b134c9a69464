use anyhow::Context;
use lookout_config::LookoutConfig;

/// Load `.env` (if any) and the layered configuration.
///
/// `server_url` is the `--server-url` flag; it beats every other source.
pub fn load_config(server_url: Option<&str>) -> anyhow::Result<LookoutConfig> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded dotenv file"),
        Err(error) if error.not_found() => {}
        Err(error) => tracing::warn!(%error, "failed to load .env; continuing without it"),
    }

    LookoutConfig::load_with_server_override(server_url)
        .context("failed to load lookout-admin configuration")
}
