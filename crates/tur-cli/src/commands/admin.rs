use anyhow::Context;
use serde_json::Value;
use tur_core::Role;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminCommands;
use crate::cli::subcommands::admin::AdminBodyArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tur admin <subcommand>`. Requires an administrator session.
pub async fn handle(
    action: &AdminCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    tur_auth::gate::require_role(&ctx.session, Role::Admin)?;

    let api = &ctx.api;
    let body = match action {
        AdminCommands::Users => api.admin_list_users().await?,
        AdminCommands::User { id } => api.admin_get_user(id).await?,
        AdminCommands::CreateCategory(args) => {
            api.admin_create_category(&parse_body(args)?).await?
        }
        AdminCommands::CreatePackage(args) => api.admin_create_package(&parse_body(args)?).await?,
        AdminCommands::CreateHostel(args) => api.admin_create_hostel(&parse_body(args)?).await?,
    };
    output(&body, flags.format)
}

fn parse_body(args: &AdminBodyArgs) -> anyhow::Result<Value> {
    let body: Value = serde_json::from_str(&args.json).context("--json is not valid JSON")?;
    if !body.is_object() {
        anyhow::bail!("--json must be a JSON object");
    }
    Ok(body)
}
