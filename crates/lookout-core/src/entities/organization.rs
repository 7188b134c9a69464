use serde::{Deserialize, Serialize};

/// An organization where the bot is installed and the user is an administrator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrgListItem {
    pub id: i64,
    pub name: String,
}

/// Organization detail, including its configuration.
///
/// `config` is opaque text: it is displayed, edited, and sent back verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub config: String,
}

impl Organization {
    /// Client-side route of this organization's detail view.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/org/{}", self.name)
    }
}

impl OrgListItem {
    /// Client-side route of this organization's detail view.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/org/{}", self.name)
    }
}
