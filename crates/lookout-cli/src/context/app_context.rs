use std::sync::Arc;

use anyhow::Context;
use lookout_api::ApiGateway;
use lookout_auth::AuthSession;
use lookout_config::LookoutConfig;
use lookout_core::CredentialStore;

/// Shared application resources initialized once at startup.
///
/// The gateway and session share one credential store, so a 401 seen by any
/// view is immediately visible to the session.
pub struct AppContext {
    pub config: LookoutConfig,
    pub gateway: Arc<ApiGateway>,
    pub session: Arc<AuthSession>,
}

impl AppContext {
    pub fn init(config: LookoutConfig) -> anyhow::Result<Self> {
        let store = lookout_auth::open_store(&config.auth).context("failed to open credential store")?;
        Self::with_store(config, store)
    }

    /// Build the context around an existing store (tests use a memory store).
    pub fn with_store(
        config: LookoutConfig,
        store: Arc<dyn CredentialStore>,
    ) -> anyhow::Result<Self> {
        let gateway = Arc::new(
            ApiGateway::new(config.server.base_url(), store.clone())
                .context("failed to build API client")?,
        );
        let session = Arc::new(AuthSession::new(store, gateway.clone()));

        tracing::debug!(
            server = gateway.base_url(),
            store = session.store().backend(),
            "application context ready"
        );

        Ok(Self {
            config,
            gateway,
            session,
        })
    }
}
