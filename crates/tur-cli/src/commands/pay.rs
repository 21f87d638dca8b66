use anyhow::Context;
use tur_api::payments::{PaymentItem, PaymentRequest};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PayArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tur pay`. Requires a session.
pub async fn handle(args: &PayArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let identity = tur_auth::require(&ctx.session).context("payments require `tur auth login`")?;

    let item = match (&args.package, &args.product) {
        (Some(package), None) => PaymentItem::Package(package.clone()),
        (None, Some(product)) => PaymentItem::Product(product.clone()),
        _ => anyhow::bail!("pay: give exactly one of --package or --product"),
    };

    tracing::debug!(user_id = %identity.id, ?item, "initiating payment");
    let body = ctx
        .api
        .initiate_payment(&PaymentRequest {
            item,
            quantity: args.quantity,
        })
        .await?;
    output(&body, flags.format)
}
