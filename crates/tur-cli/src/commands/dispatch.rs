use crate::cli::{Commands, GlobalFlags};
use crate::commands;
use crate::context::AppContext;

/// Route a session-aware command to its handler.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Catalog { action } => commands::catalog::handle(&action, ctx, flags).await,
        Commands::Pay(args) => commands::pay::handle(&args, ctx, flags).await,
        Commands::Admin { action } => commands::admin::handle(&action, ctx, flags).await,
        Commands::Capabilities => commands::capabilities::handle(ctx, flags),
        Commands::DecodeToken(_) | Commands::AssetUrl(_) | Commands::Schema(_) => {
            anyhow::bail!("command does not need an application context")
        }
    }
}
