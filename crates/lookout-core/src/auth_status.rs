//! Authentication status of the current profile.
//!
//! ```text
//! unknown → authenticated(user)
//!         → unauthenticated
//! ```
//!
//! `Unknown` is only ever the initial state. Going back to it requires a fresh
//! process (the CLI equivalent of a page load).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entities::User;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", content = "user", rename_all = "snake_case")]
pub enum AuthStatus {
    #[default]
    Unknown,
    Authenticated(User),
    Unauthenticated,
}

impl AuthStatus {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Whether the check has resolved to one of the terminal states.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Unknown | Self::Unauthenticated => None,
        }
    }

    /// Valid transitions: only `Unknown` may move, and only to a resolved state.
    #[must_use]
    pub const fn can_transition_to(&self, next: &Self) -> bool {
        matches!(self, Self::Unknown) && next.is_resolved()
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Authenticated(_) => "authenticated",
            Self::Unauthenticated => "unauthenticated",
        }
    }
}

impl fmt::Display for AuthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
