//! # lookout-core
//!
//! Core types shared by every lookout-admin crate.
//!
//! This crate provides:
//! - Domain entities returned by the lookout API (user, organizations)
//! - The tri-state [`AuthStatus`] with its allowed transitions
//! - The opaque [`Credential`] and the [`CredentialStore`] contract
//! - Cross-cutting error types

pub mod auth_status;
pub mod credential;
pub mod entities;
pub mod errors;

pub use auth_status::AuthStatus;
pub use credential::{CREDENTIAL_KEY, Credential, CredentialStore, MemoryCredentialStore};
pub use entities::{AuthToken, OrgListItem, Organization, User};
pub use errors::StoreError;
