pub mod admin;
pub mod asset_url;
pub mod auth;
pub mod capabilities;
pub mod catalog;
pub mod decode_token;
pub mod dispatch;
pub mod pay;
pub mod schema;
