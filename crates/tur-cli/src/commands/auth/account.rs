//! Account commands that do not change the session: registration and the
//! single-use token endpoints.

use tur_api::auth::RegisterRequest;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::{
    AuthForgotArgs, AuthRegisterArgs, AuthResetArgs, AuthTokenArgs,
};
use crate::context::AppContext;
use crate::output::output;

pub async fn register(
    args: &AuthRegisterArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let body = ctx
        .api
        .register(&RegisterRequest {
            name: args.name.clone(),
            email: args.email.clone(),
            password: args.password.clone(),
            role: args.role.as_str().to_string(),
            phone: args.phone.clone(),
            business_name: args.business_name.clone(),
            address: args.address.clone(),
        })
        .await?;
    output(&body, flags.format)
}

pub async fn verify_email(
    args: &AuthTokenArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let body = tur_auth::flow::verify_email(&ctx.api, &args.token).await?;
    output(&body, flags.format)
}

pub async fn forgot_password(
    args: &AuthForgotArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let body = ctx.api.forgot_password(&args.email).await?;
    output(&body, flags.format)
}

pub async fn reset_password(
    args: &AuthResetArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let body = tur_auth::flow::reset_password(&ctx.api, &args.token, &args.password).await?;
    output(&body, flags.format)
}
