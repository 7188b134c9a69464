use crate::cli::GlobalFlags;
use crate::cli::root_commands::OpenArgs;
use crate::context::AppContext;
use crate::router::{Navigator, Route};

pub async fn handle(args: &OpenArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let route = Route::parse(&args.path)?;
    Navigator::new(ctx, flags).open(route).await
}
