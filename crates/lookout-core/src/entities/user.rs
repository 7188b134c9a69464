use serde::{Deserialize, Serialize};

/// Identity of the logged-in administrator, as reported by `GET /api/me`.
///
/// Never persisted; rebuilt whenever the session has to re-validate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub name: String,
}

/// Payload of a successful OAuth callback exchange.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthToken {
    pub token: String,
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthToken")
            .field("token", &"<redacted>")
            .finish()
    }
}
