//! # lookout-api
//!
//! Client for the lookout web API.
//!
//! Every request goes through [`ApiGateway::call`], which:
//! - prefixes the configured server URL,
//! - attaches `Authorization: Bearer <credential>` and a JSON content type,
//! - unwraps the `{ data: ... }` success envelope,
//! - turns any failure into an [`ApiError`] carrying an ordered list of messages,
//! - clears the stored credential when the server answers 401.
//!
//! Typed operations are exposed through two traits so that callers (the auth
//! session and the organization views) can be tested against fakes:
//! [`SessionApi`] and [`OrganizationApi`].

mod endpoints;
mod envelope;
mod error;
mod gateway;

pub use endpoints::{OrganizationApi, SessionApi};
pub use envelope::ServerError;
pub use error::{ApiError, ApiErrorKind};
pub use gateway::{ApiGateway, CallOptions};
