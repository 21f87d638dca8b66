use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AssetUrlArgs;
use crate::output::output;

#[derive(Serialize)]
struct AssetUrlResponse {
    path: String,
    url: String,
}

/// Handle `tur asset-url`.
pub fn handle(
    args: &AssetUrlArgs,
    flags: &GlobalFlags,
    config: &tur_config::TurismoConfig,
) -> anyhow::Result<()> {
    output(
        &AssetUrlResponse {
            url: tur_core::assets::resolve_asset_url(&config.api.base_url, &args.path),
            path: args.path.clone(),
        },
        flags.format,
    )
}
