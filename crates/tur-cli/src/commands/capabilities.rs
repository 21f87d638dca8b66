use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tur capabilities`. Absence of a session is a valid answer.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&tur_auth::capabilities(&ctx.session), flags.format)
}
