use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `tur schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name.as_str() {
        "identity" => schema_for!(tur_core::Identity),
        "token-payload" => schema_for!(tur_core::TokenPayload),
        "capabilities" => schema_for!(tur_core::Capabilities),
        other => anyhow::bail!(
            "unknown schema type '{other}' (expected identity, token-payload, capabilities)"
        ),
    };
    output(&schema, flags.format)
}
