//! # tur-auth
//!
//! Client-side session handling for the Turismo client.
//!
//! - [`session`]: the session store and its single writer
//! - [`gate`]: fail-fast identity access ([`gate::require`])
//! - [`token`]: unverified JWT payload decoding, session vs single-use
//! - [`token_store`]: keychain / env / file token persistence
//! - [`flow`]: login, restore, logout, and the single-use token endpoints

pub mod error;
pub mod flow;
pub mod gate;
pub mod session;
pub mod token;
pub mod token_store;

pub use error::AuthError;
pub use session::{SessionStore, SessionWriter};
pub use token_store::{TokenSource, TokenStore};

use std::sync::Arc;

use tur_core::{Capabilities, Identity};

/// Capability flags for whatever the store currently holds.
#[must_use]
pub fn capabilities(store: &SessionStore) -> Capabilities {
    Capabilities::derive(store.read().as_deref())
}

/// Identity for code that must run inside an authenticated scope.
///
/// # Errors
///
/// Returns [`AuthError::MissingSessionContext`] when no session is held.
pub fn require(store: &SessionStore) -> Result<Arc<Identity>, AuthError> {
    gate::require(store)
}
