use clap::{ArgGroup, Args, Subcommand};

use crate::cli::subcommands::{AdminCommands, AuthCommands, CatalogCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Authentication and account commands.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Browse categories, packages, entrepreneurs, hostels, and products.
    Catalog {
        #[command(subcommand)]
        action: CatalogCommands,
    },
    /// Start a payment for a package or product (requires login).
    Pay(PayArgs),
    /// Management console (requires an administrator session).
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
    /// Show capability flags for the current session.
    Capabilities,
    /// Decode a token payload without verifying it.
    DecodeToken(DecodeTokenArgs),
    /// Resolve an image path against the API base URL.
    AssetUrl(AssetUrlArgs),
    /// Print the JSON schema of a client type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
#[command(group(ArgGroup::new("item").required(true).args(["package", "product"])))]
pub struct PayArgs {
    /// Package to pay for.
    #[arg(long)]
    pub package: Option<String>,
    /// Product to pay for.
    #[arg(long)]
    pub product: Option<String>,
    /// Units to buy.
    #[arg(long, default_value_t = 1)]
    pub quantity: u32,
}

#[derive(Clone, Debug, Args)]
pub struct DecodeTokenArgs {
    /// JWT to decode.
    pub token: String,
}

#[derive(Clone, Debug, Args)]
pub struct AssetUrlArgs {
    /// Image path as returned by the API.
    pub path: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name: identity, token-payload, capabilities.
    pub type_name: String,
}
