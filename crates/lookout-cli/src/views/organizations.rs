use lookout_api::OrganizationApi;
use lookout_core::{OrgListItem, User};
use serde::Serialize;

use super::{Header, Loadable};
use crate::output::{Page, table_text};

/// Organization list on the index page.
#[derive(Debug, Default)]
pub struct OrganizationsView {
    pub state: Loadable<Vec<OrgListItem>>,
}

/// One list entry with the path of its detail page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OrgLink {
    pub id: i64,
    pub name: String,
    pub path: String,
}

impl OrganizationsView {
    pub async fn load<A: OrganizationApi>(api: &A) -> Self {
        Self {
            state: Loadable::from_result(api.orgs().await),
        }
    }

    #[must_use]
    pub fn links(&self) -> Vec<OrgLink> {
        self.state
            .ready()
            .map(|orgs| {
                orgs.iter()
                    .map(|org| OrgLink {
                        id: org.id,
                        name: org.name.clone(),
                        path: org.path(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// `/`: greeting plus the organization list.
#[derive(Debug, Serialize)]
pub struct IndexPage {
    #[serde(flatten)]
    pub header: Header,
    pub user: User,
    pub organizations: Vec<OrgLink>,
}

impl IndexPage {
    #[must_use]
    pub fn new(user: &User, view: &OrganizationsView) -> Self {
        Self {
            header: Header::for_user(user),
            user: user.clone(),
            organizations: view.links(),
        }
    }
}

impl Page for IndexPage {
    fn text(&self) -> anyhow::Result<String> {
        let list = table_text(&self.organizations, &["id", "name", "path"])?;
        Ok(format!("{}\n\n{list}", self.header.text()))
    }
}
