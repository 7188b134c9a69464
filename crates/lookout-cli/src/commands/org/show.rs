use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::router::{Guarded, Navigator, Route, Visit};

pub async fn handle(name: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let route = Route::Org {
        name: name.to_string(),
    };
    Navigator::new(ctx, flags).open(route).await
}

/// `/org/:name`: settings of one organization.
pub async fn page(ctx: &AppContext, flags: &GlobalFlags, name: &str) -> anyhow::Result<Visit> {
    match super::load(ctx, name).await {
        Guarded::Ready((user, view)) => {
            super::show_view(&user, &view, flags)?;
            Ok(Visit::Shown)
        }
        Guarded::Redirect(redirect) => Ok(Visit::Redirect(redirect)),
        Guarded::Loading => anyhow::bail!("session check did not finish"),
    }
}
