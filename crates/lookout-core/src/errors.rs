//! Cross-cutting error types.
//!
//! Transport and API failures live in `lookout-api` (`ApiError`); session and
//! login-flow failures in `lookout-auth`. The binary converges them with `anyhow`.

use thiserror::Error;

/// Errors raised by a [`CredentialStore`](crate::CredentialStore) backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read, written, or removed.
    #[error("credential file error: {0}")]
    File(String),

    /// The OS keychain rejected the operation.
    #[error("keyring error: {0}")]
    Keyring(String),

    /// No location is available to hold the credential.
    #[error("credential store unavailable: {0}")]
    Unavailable(String),
}
