use crate::cli::GlobalFlags;
use crate::cli::subcommands::CatalogCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tur catalog <subcommand>`. Bodies are printed as the API sent them.
pub async fn handle(
    action: &CatalogCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let api = &ctx.api;
    let body = match action {
        CatalogCommands::Categories => api.list_categories().await?,
        CatalogCommands::Category { id } => api.get_category(id).await?,
        CatalogCommands::CategoryPackages { id } => api.list_category_packages(id).await?,
        CatalogCommands::Packages => api.list_packages().await?,
        CatalogCommands::Package { id } => api.get_package(id).await?,
        CatalogCommands::Entrepreneurs => api.list_entrepreneurs().await?,
        CatalogCommands::Entrepreneur { id } => api.get_entrepreneur(id).await?,
        CatalogCommands::EntrepreneurProducts { id } => api.list_entrepreneur_products(id).await?,
        CatalogCommands::Hostels => api.list_hostels().await?,
        CatalogCommands::Hostel { id } => api.get_hostel(id).await?,
        CatalogCommands::Products => api.list_products().await?,
        CatalogCommands::Product { id } => api.get_product(id).await?,
    };
    output(&body, flags.format)
}
