use serde::Serialize;
use tur_auth::TokenSource;
use tur_core::{Capabilities, Role};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<String>,
    email: Option<String>,
    role: Option<Role>,
    token_source: Option<TokenSource>,
    capabilities: Capabilities,
    note: Option<String>,
}

/// Never fails on a missing session; absence is reported, not raised.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let identity = ctx.session.read();
    let note = if identity.is_some() {
        None
    } else if ctx.tokens.detect_source().is_some() {
        Some("stored token could not be restored (expired, single-use, or rejected)".into())
    } else {
        Some("no stored token".into())
    };

    output(
        &AuthStatusResponse {
            authenticated: identity.is_some(),
            user_id: identity.as_ref().map(|i| i.id.clone()),
            email: identity.as_ref().map(|i| i.email.clone()),
            role: identity.as_ref().map(|i| i.role()),
            token_source: ctx.token_source,
            capabilities: Capabilities::derive(identity.as_deref()),
            note,
        },
        flags.format,
    )
}
