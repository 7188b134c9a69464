mod edit;
mod set;
pub mod show;

use lookout_core::User;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::OrgCommands;
use crate::commands::fail_with;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;
use crate::router::{Guarded, Navigator, Redirect, Route, guard};
use crate::views::{Loadable, OrgPage, OrganizationView, RenderedFailure};

/// Handle `lookout-admin org <subcommand>`.
pub async fn handle(
    action: &OrgCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        OrgCommands::Show(args) => show::handle(&args.name, ctx, flags).await,
        OrgCommands::Edit(args) => edit::handle(&args.name, ctx, flags).await,
        OrgCommands::Set(args) => set::handle(args, ctx, flags).await,
    }
}

/// Guard `/org/:name` and load the organization.
async fn load(ctx: &AppContext, name: &str) -> Guarded<(User, OrganizationView)> {
    let route = Route::Org {
        name: name.to_string(),
    };
    guard(ctx.session.clone(), &route, |user| async move {
        let _spinner = Progress::spinner(&format!("Loading {name}…"));
        let view = OrganizationView::load(ctx.gateway.as_ref(), name).await;
        (user, view)
    })
    .await
}

/// Load for an edit; a redirect or load failure is shown and ends the command.
async fn load_for_edit(
    ctx: &AppContext,
    flags: &GlobalFlags,
    name: &str,
) -> anyhow::Result<(User, OrganizationView)> {
    match load(ctx, name).await {
        Guarded::Ready((user, view)) => match view.state.errors() {
            Some(errors) => Err(fail_with(errors, flags)),
            None => Ok((user, view)),
        },
        Guarded::Redirect(redirect) => Err(show_redirect(ctx, flags, redirect).await),
        Guarded::Loading => Err(anyhow::anyhow!("session check did not finish")),
    }
}

async fn show_redirect(ctx: &AppContext, flags: &GlobalFlags, redirect: Redirect) -> anyhow::Error {
    match Navigator::new(ctx, flags).follow(redirect).await {
        Ok(()) => RenderedFailure.into(),
        Err(error) => error,
    }
}

/// Save the view's draft and print the result.
async fn save_and_show(
    ctx: &AppContext,
    flags: &GlobalFlags,
    user: &User,
    mut view: OrganizationView,
) -> anyhow::Result<()> {
    let saved = {
        let _spinner = Progress::spinner(&format!("Saving {}…", view.name));
        view.save(ctx.gateway.as_ref()).await
    };

    match (&view.state, saved) {
        (Loadable::Failed(errors), Err(_)) => Err(fail_with(errors, flags)),
        (_, Err(error)) => Err(error),
        (_, Ok(())) => {
            tracing::info!(org = %view.name, "configuration saved");
            show_view(user, &view, flags)
        }
    }
}

fn show_view(user: &User, view: &OrganizationView, flags: &GlobalFlags) -> anyhow::Result<()> {
    match OrgPage::new(user, view) {
        Some(page) => output(&page, flags.format),
        None => Err(fail_with(view.state.errors().unwrap_or_default(), flags)),
    }
}
