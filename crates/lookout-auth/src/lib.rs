//! # lookout-auth
//!
//! Session management for lookout-admin.
//!
//! Provides the persistent credential stores (plain file, OS keychain), the
//! [`AuthSession`] state machine that derives [`AuthStatus`](lookout_core::AuthStatus)
//! from the stored credential and `GET /api/me`, and the interactive browser
//! login flow (`tiny_http` + `open`).

pub mod browser_flow;
pub mod error;
pub mod session;
pub mod token_store;

pub use error::AuthError;
pub use session::{AuthSession, AuthStatusProvider, FixedStatus};
pub use token_store::{FileCredentialStore, KeyringCredentialStore, open_store};
