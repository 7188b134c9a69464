//! Entities returned by the lookout API.
//!
//! Field names match the JSON payloads inside the `{ data: ... }` envelope.

mod organization;
mod user;

pub use organization::{OrgListItem, Organization};
pub use user::{AuthToken, User};
