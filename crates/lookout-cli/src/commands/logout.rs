use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::router::{Navigator, Redirect, Route, Visit};

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    Navigator::new(ctx, flags).open(Route::Logout).await
}

/// `/logout`: forget the session and go to `/`.
pub fn page(ctx: &AppContext) -> Visit {
    ctx.session.logout();
    tracing::info!("logged out");
    Visit::Redirect(Redirect::to(Route::Index))
}
