use crate::cli::GlobalFlags;
use crate::cli::root_commands::CallbackArgs;
use crate::commands::{fail_with, parse_return_to};
use crate::context::AppContext;
use crate::progress::Progress;
use crate::router::{Navigator, Redirect, Route, Visit};

pub async fn handle(
    args: &CallbackArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let return_to = parse_return_to(args.return_to.as_deref())?;
    let query = args.query.trim_start_matches('?').to_string();

    Navigator::new(ctx, flags)
        .with_return_to(return_to)
        .open(Route::Callback { query })
        .await
}

/// `/callback?<query>`: exchange the provider's answer for a session, then
/// go back to where the login started.
pub async fn page(
    ctx: &AppContext,
    flags: &GlobalFlags,
    query: &str,
    return_to: Option<Route>,
) -> anyhow::Result<Visit> {
    let result = {
        let _spinner = Progress::spinner("Logging in…");
        ctx.session.login(query).await
    };

    match result {
        Ok(()) => Ok(Visit::Redirect(Redirect::to(
            return_to.unwrap_or(Route::Index),
        ))),
        Err(error) => Err(fail_with(&error.messages(), flags)),
    }
}
