use clap::{Args, Subcommand};

/// Management console commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// List users.
    Users,
    /// Show one user.
    User { id: String },
    /// Create a category from a JSON body.
    CreateCategory(AdminBodyArgs),
    /// Create a package from a JSON body.
    CreatePackage(AdminBodyArgs),
    /// Create a hostel from a JSON body.
    CreateHostel(AdminBodyArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AdminBodyArgs {
    /// Request body as a JSON object.
    #[arg(long)]
    pub json: String,
}
