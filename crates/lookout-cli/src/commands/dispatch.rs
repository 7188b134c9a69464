use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Open(args) => commands::open::handle(&args, ctx, flags).await,
        Commands::Orgs => commands::orgs::handle(ctx, flags).await,
        Commands::Org { action } => commands::org::handle(&action, ctx, flags).await,
        Commands::Login(args) => commands::login::handle(&args, ctx, flags).await,
        Commands::Callback(args) => commands::callback::handle(&args, ctx, flags).await,
        Commands::Logout => commands::logout::handle(ctx, flags).await,
        Commands::Status => commands::status::handle(ctx, flags).await,
    }
}
