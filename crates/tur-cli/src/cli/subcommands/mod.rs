pub mod admin;
pub mod auth;
pub mod catalog;

pub use admin::AdminCommands;
pub use auth::AuthCommands;
pub use catalog::CatalogCommands;
