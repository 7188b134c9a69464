use lookout_api::OrganizationApi;
use lookout_core::{Organization, User};
use serde::Serialize;

use super::{Header, Loadable};
use crate::output::Page;

/// Detail and edit state for `/org/:name`.
///
/// `draft` is the locally edited config; it follows the server copy after
/// every load or save and is cleared when either fails.
#[derive(Debug)]
pub struct OrganizationView {
    pub name: String,
    pub state: Loadable<Organization>,
    draft: Option<String>,
}

impl OrganizationView {
    pub async fn load<A: OrganizationApi>(api: &A, name: &str) -> Self {
        let mut view = Self {
            name: name.to_string(),
            state: Loadable::Loading,
            draft: None,
        };
        view.apply(Loadable::from_result(api.org(name).await));
        view
    }

    #[must_use]
    pub fn draft(&self) -> Option<&str> {
        self.draft.as_deref()
    }

    /// Replace the draft. Nothing is sent until [`Self::save`].
    pub fn edit(&mut self, config: impl Into<String>) {
        self.draft = Some(config.into());
    }

    /// Whether the draft differs from the loaded config.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        match (self.state.ready(), self.draft()) {
            (Some(org), Some(draft)) => org.config != draft,
            _ => false,
        }
    }

    /// Send the draft and adopt the server's copy.
    ///
    /// # Errors
    ///
    /// Fails without a request when no organization is loaded. A rejected save
    /// switches the view to `Failed` and returns the API error.
    pub async fn save<A: OrganizationApi>(&mut self, api: &A) -> anyhow::Result<()> {
        let Some(org) = self.state.ready() else {
            anyhow::bail!("cannot save: organization '{}' is not loaded", self.name);
        };
        let name = org.name.clone();
        let config = self.draft.clone().unwrap_or_else(|| org.config.clone());

        match api.update_config(&name, &config).await {
            Ok(saved) => {
                self.apply(Loadable::Ready(saved));
                Ok(())
            }
            Err(error) => {
                tracing::debug!(org = %name, %error, "save rejected");
                self.apply(Loadable::failed(error.messages().to_vec()));
                Err(error.into())
            }
        }
    }

    fn apply(&mut self, state: Loadable<Organization>) {
        self.draft = state.ready().map(|org| org.config.clone());
        self.state = state;
    }
}

/// `/org/:name` as printed.
#[derive(Debug, Serialize)]
pub struct OrgPage {
    #[serde(flatten)]
    pub header: Header,
    pub title: String,
    pub organization: Organization,
    pub back: &'static str,
}

impl OrgPage {
    /// Page for a loaded view; `None` when the view holds no organization.
    #[must_use]
    pub fn new(user: &User, view: &OrganizationView) -> Option<Self> {
        let org = view.state.ready()?;
        Some(Self {
            header: Header::for_user(user),
            title: format!("Settings for Organization {}", org.name),
            organization: Organization {
                config: view.draft().unwrap_or(&org.config).to_string(),
                ..org.clone()
            },
            back: "/",
        })
    }
}

impl Page for OrgPage {
    fn text(&self) -> anyhow::Result<String> {
        let rule = "-".repeat(self.title.chars().count());
        Ok(format!(
            "{header}\n\n{title}\n{rule}\n{config}\n{rule}\nBack to organizations: lookout-admin open {back}",
            header = self.header.text(),
            title = self.title,
            config = self.organization.config.trim_end_matches('\n'),
            back = self.back,
        ))
    }
}
