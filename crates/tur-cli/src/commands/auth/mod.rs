mod account;
mod login;
mod logout;
mod status;
mod whoami;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;

/// Handle `tur auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, ctx, flags).await,
        AuthCommands::Logout => logout::handle(ctx, flags),
        AuthCommands::Status => status::handle(ctx, flags),
        AuthCommands::Whoami => whoami::handle(ctx, flags),
        AuthCommands::Register(args) => account::register(args, ctx, flags).await,
        AuthCommands::VerifyEmail(args) => account::verify_email(args, ctx, flags).await,
        AuthCommands::ForgotPassword(args) => account::forgot_password(args, ctx, flags).await,
        AuthCommands::ResetPassword(args) => account::reset_password(args, ctx, flags).await,
    }
}
