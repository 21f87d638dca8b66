//! # tur-core
//!
//! Core types shared by every Turismo crate.
//!
//! - [`Role`]: the closed role enumeration used by the booking backend
//! - [`Identity`]: the authenticated principal, with role-specific fields
//!   carried by a [`RoleProfile`] variant
//! - [`TokenPayload`]: the decoded body of an authentication token, and the
//!   [`SessionToken`] it must become before any session code accepts it
//! - [`Capabilities`]: boolean projections of the current role
//! - Asset URL resolution against the configured API base
//! - Cross-cutting error types

pub mod assets;
pub mod capabilities;
pub mod errors;
pub mod identity;
pub mod role;
pub mod token;

pub use capabilities::Capabilities;
pub use errors::CoreError;
pub use identity::{Identity, RoleProfile};
pub use role::Role;
pub use token::{SessionToken, TokenKind, TokenPayload, TokenPurpose};
