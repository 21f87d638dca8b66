use clap::Subcommand;

/// Public catalog browsing.
#[derive(Clone, Debug, Subcommand)]
pub enum CatalogCommands {
    /// List categories.
    Categories,
    /// Show one category.
    Category { id: String },
    /// List packages in a category.
    CategoryPackages { id: String },
    /// List packages.
    Packages,
    /// Show one package.
    Package { id: String },
    /// List entrepreneurs.
    Entrepreneurs,
    /// Show one entrepreneur.
    Entrepreneur { id: String },
    /// List an entrepreneur's products.
    EntrepreneurProducts { id: String },
    /// List hostels.
    Hostels,
    /// Show one hostel.
    Hostel { id: String },
    /// List products.
    Products,
    /// Show one product.
    Product { id: String },
}
