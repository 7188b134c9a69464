use crate::cli::GlobalFlags;
use crate::commands::fail_with;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;
use crate::router::{Guarded, Navigator, Route, Visit, guard};
use crate::views::{IndexPage, Loadable, OrganizationsView};

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    Navigator::new(ctx, flags).open(Route::Index).await
}

/// `/`: greeting and organization list.
pub async fn page(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<Visit> {
    let outcome = guard(ctx.session.clone(), &Route::Index, |user| async move {
        let _spinner = Progress::spinner("Loading organizations…");
        let view = OrganizationsView::load(ctx.gateway.as_ref()).await;
        (user, view)
    })
    .await;

    match outcome {
        Guarded::Ready((user, view)) => match &view.state {
            Loadable::Ready(_) => {
                output(&IndexPage::new(&user, &view), flags.format)?;
                Ok(Visit::Shown)
            }
            Loadable::Failed(errors) => Err(fail_with(errors, flags)),
            Loadable::Loading => anyhow::bail!("organization list did not load"),
        },
        Guarded::Redirect(redirect) => Ok(Visit::Redirect(redirect)),
        Guarded::Loading => anyhow::bail!("session check did not finish"),
    }
}
