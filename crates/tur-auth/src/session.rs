//! Session store.
//!
//! Holds at most one [`Identity`] for the life of the client. Readers get a
//! cloneable [`SessionStore`]; the authentication flow owns the single
//! [`SessionWriter`], which is the only way to set or clear the identity.

use std::sync::{Arc, PoisonError, RwLock};

use tur_core::Identity;

type Slot = Arc<RwLock<Option<Arc<Identity>>>>;

/// Read-only handle to the current session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    slot: Slot,
}

/// Exclusive write handle. Not `Clone`.
#[derive(Debug)]
pub struct SessionWriter {
    slot: Slot,
}

impl SessionStore {
    /// Create an empty store and its only writer.
    #[must_use]
    pub fn new() -> (Self, SessionWriter) {
        let slot: Slot = Arc::new(RwLock::new(None));
        (
            Self {
                slot: Arc::clone(&slot),
            },
            SessionWriter { slot },
        )
    }

    /// Current identity, or `None`. Never fails.
    #[must_use]
    pub fn read(&self) -> Option<Arc<Identity>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }
}

impl SessionWriter {
    /// Replace the held identity and return the shared handle now stored.
    pub fn set(&self, identity: Identity) -> Arc<Identity> {
        let identity = Arc::new(identity);
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&identity));
        tracing::debug!(user_id = %identity.id, role = %identity.role(), "session set");
        identity
    }

    pub fn clear(&self) {
        let previous = self
            .slot
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if previous.is_some() {
            tracing::debug!("session cleared");
        }
    }
}
