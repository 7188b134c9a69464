use lookout_core::User;
use serde::Serialize;

/// Greeting shown on top of every protected page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Header {
    pub greeting: String,
    pub logout: &'static str,
}

impl Header {
    #[must_use]
    pub fn for_user(user: &User) -> Self {
        Self {
            greeting: format!("Hello {}!", user.name),
            logout: "/logout",
        }
    }

    #[must_use]
    pub fn text(&self) -> String {
        format!("{} (logout: lookout-admin logout)", self.greeting)
    }
}
