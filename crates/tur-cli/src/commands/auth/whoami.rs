use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Print the session identity. Fails with a missing-session error outside a
/// session.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let identity = tur_auth::require(&ctx.session)?;
    output(identity.as_ref(), flags.format)
}
