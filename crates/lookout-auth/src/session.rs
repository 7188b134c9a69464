//! Authentication session for the current profile.
//!
//! [`AuthSession`] answers "who is logged in" from two inputs: the credential in
//! the [`CredentialStore`] and the identity the server returns for it. The
//! identity is cached together with the credential it was validated for, so any
//! credential change (login, logout, a 401 clearing the store) forces a fresh
//! `GET /api/me`.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lookout_api::{ApiGateway, SessionApi};
use lookout_core::{AuthStatus, Credential, CredentialStore, User};

use crate::error::AuthError;

/// Anything that can resolve the current [`AuthStatus`].
///
/// The route guard only depends on this, so views can be exercised against a
/// canned status.
pub trait AuthStatusProvider: Send + Sync {
    fn status(&self) -> impl Future<Output = AuthStatus> + Send;
}

type Identity = (Credential, User);

pub struct AuthSession<A: SessionApi = ApiGateway> {
    store: Arc<dyn CredentialStore>,
    api: Arc<A>,
    identity: Mutex<Option<Identity>>,
}

impl<A: SessionApi> std::fmt::Debug for AuthSession<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("store", &self.store.backend())
            .field("identity", &*self.identity())
            .finish_non_exhaustive()
    }
}

impl<A: SessionApi> AuthSession<A> {
    #[must_use]
    pub fn new(store: Arc<dyn CredentialStore>, api: Arc<A>) -> Self {
        Self {
            store,
            api,
            identity: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    #[must_use]
    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    /// Resolve the current status.
    ///
    /// - no credential: `Unauthenticated`, without a request;
    /// - identity already validated for this credential: `Authenticated`, without a request;
    /// - otherwise `GET /api/me` decides. A failed check leaves the credential
    ///   alone here; the gateway has already cleared it if the server said 401.
    pub async fn status(&self) -> AuthStatus {
        let Some(credential) = self.store.get() else {
            self.identity().take();
            return AuthStatus::Unauthenticated;
        };

        if let Some(user) = self.cached_user(&credential) {
            return AuthStatus::Authenticated(user);
        }

        match self.api.me().await {
            Ok(user) => {
                *self.identity() = Some((credential, user.clone()));
                tracing::debug!(user = %user.name, "session validated");
                AuthStatus::Authenticated(user)
            }
            Err(error) => {
                tracing::warn!(%error, "session check failed");
                AuthStatus::Unauthenticated
            }
        }
    }

    pub async fn is_authenticated(&self) -> bool {
        self.status().await.is_authenticated()
    }

    /// Identity from the last successful check, if the credential is unchanged.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.store
            .get()
            .and_then(|credential| self.cached_user(&credential))
    }

    /// Exchange the OAuth callback query for a session token and store it.
    ///
    /// # Errors
    ///
    /// Returns the exchange's [`ApiError`](lookout_api::ApiError) unchanged, or
    /// [`AuthError::TokenStore`] if the token cannot be persisted. Either way no
    /// credential is stored.
    pub async fn login(&self, query: &str) -> Result<(), AuthError> {
        let token = self.api.callback(query).await?;
        self.store.set(&Credential::new(token.token))?;
        self.identity().take();
        tracing::info!(backend = self.store.backend(), "logged in");
        Ok(())
    }

    /// Forget the credential and identity. Idempotent; store failures are logged.
    pub fn logout(&self) {
        if let Err(error) = self.store.clear() {
            tracing::warn!(%error, "failed to clear credential on logout");
        }
        self.identity().take();
    }

    #[must_use]
    pub fn login_url(&self) -> String {
        self.api.login_url()
    }

    fn cached_user(&self, credential: &Credential) -> Option<User> {
        self.identity()
            .as_ref()
            .filter(|(cached, _)| cached == credential)
            .map(|(_, user)| user.clone())
    }

    fn identity(&self) -> MutexGuard<'_, Option<Identity>> {
        self.identity.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<A: SessionApi> AuthStatusProvider for AuthSession<A> {
    fn status(&self) -> impl Future<Output = AuthStatus> + Send {
        Self::status(self)
    }
}

/// Provider that always answers with a fixed status.
#[derive(Debug, Clone)]
pub struct FixedStatus(pub AuthStatus);

impl AuthStatusProvider for FixedStatus {
    fn status(&self) -> impl Future<Output = AuthStatus> + Send {
        std::future::ready(self.0.clone())
    }
}
