use anyhow::Context;
use tokio::io::AsyncReadExt;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::OrgSetArgs;
use crate::context::AppContext;

pub async fn handle(args: &OrgSetArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = read_source(args).await?;
    let (user, mut view) = super::load_for_edit(ctx, flags, &args.name).await?;

    view.edit(config);
    super::save_and_show(ctx, flags, &user, view).await
}

async fn read_source(args: &OrgSetArgs) -> anyhow::Result<String> {
    if let Some(path) = &args.file {
        return tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()));
    }

    let mut config = String::new();
    tokio::io::stdin()
        .read_to_string(&mut config)
        .await
        .context("failed to read configuration from stdin")?;
    Ok(config)
}
