use std::fmt;
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::errors::StoreError;

/// Fixed key under which the session token is persisted.
pub const CREDENTIAL_KEY: &str = "token";

/// Opaque bearer token proving an authenticated session.
///
/// The client never inspects the value. `Debug` output is redacted so the token
/// does not leak into logs.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

impl From<String> for Credential {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Persistent storage for the single session credential.
///
/// Every operation is synchronous and goes straight to the backing store:
/// implementations must not cache, so [`exists`](Self::exists) and
/// [`get`](Self::get) always agree. Concurrent writers resolve last-write-wins.
pub trait CredentialStore: Send + Sync {
    /// Current credential, if one is stored.
    fn get(&self) -> Option<Credential>;

    /// Persist `credential`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be written.
    fn set(&self, credential: &Credential) -> Result<(), StoreError>;

    /// Remove the stored credential. Clearing an empty store is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be modified.
    fn clear(&self) -> Result<(), StoreError>;

    /// Whether a credential is stored. Equivalent to `get().is_some()`.
    fn exists(&self) -> bool {
        self.get().is_some()
    }

    /// Short name of the backend, for status output.
    fn backend(&self) -> &'static str;
}

/// In-memory credential store.
///
/// Used by tests and by `auth.store = "memory"`; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    slot: Mutex<Option<Credential>>,
}

impl MemoryCredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `credential`.
    #[must_use]
    pub fn with_credential(credential: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(Credential::new(credential))),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<Credential> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, credential: &Credential) -> Result<(), StoreError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(credential.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).take();
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
