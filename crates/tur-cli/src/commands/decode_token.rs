use serde::Serialize;
use tur_core::{Capabilities, TokenKind, TokenPayload};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DecodeTokenArgs;
use crate::output::output;

#[derive(Serialize)]
struct DecodeTokenResponse {
    payload: TokenPayload,
    kind: TokenKind,
    expires_at: Option<String>,
    capabilities: Capabilities,
}

impl DecodeTokenResponse {
    fn describe(payload: TokenPayload) -> Self {
        Self {
            kind: payload.kind(),
            expires_at: payload.expires_at().map(|t| t.to_rfc3339()),
            capabilities: Capabilities::from_role(payload.role),
            payload,
        }
    }
}

/// Handle `tur decode-token`.
pub fn handle(args: &DecodeTokenArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let payload = tur_auth::token::decode_payload(&args.token)?;
    output(&DecodeTokenResponse::describe(payload), flags.format)
}
