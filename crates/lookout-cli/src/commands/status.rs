use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{Page, output, table_text};
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct StatusPage {
    state: &'static str,
    user: Option<String>,
    server: String,
    credential_store: &'static str,
    credential_present: bool,
}

impl Page for StatusPage {
    fn text(&self) -> anyhow::Result<String> {
        table_text(self, &[])
    }
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = {
        let _spinner = Progress::spinner("Checking session…");
        ctx.session.status().await
    };
    let store = ctx.session.store();

    output(
        &StatusPage {
            state: status.as_str(),
            user: status.user().map(|user| user.name.clone()),
            server: ctx.gateway.base_url().to_string(),
            credential_store: store.backend(),
            credential_present: store.exists(),
        },
        flags.format,
    )
}
