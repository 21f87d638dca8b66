use serde::Serialize;
use tur_api::auth::LoginRequest;
use tur_core::{Capabilities, Role};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: String,
    name: String,
    role: Role,
    capabilities: Capabilities,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let identity = ctx
        .login(&LoginRequest {
            email: args.email.clone(),
            password: args.password.clone(),
        })
        .await?;

    output(
        &AuthLoginResponse {
            authenticated: true,
            user_id: identity.id.clone(),
            name: identity.name.clone(),
            role: identity.role(),
            capabilities: Capabilities::derive(Some(identity.as_ref())),
        },
        flags.format,
    )
}
