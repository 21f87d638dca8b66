//! Access gate: fail-fast identity access for code that must run inside an
//! authenticated scope.

use std::sync::Arc;

use tur_core::{Identity, Role};

use crate::error::AuthError;
use crate::session::SessionStore;

/// Return the held identity itself, not a copy.
///
/// # Errors
///
/// Returns [`AuthError::MissingSessionContext`] when no identity is held.
pub fn require(store: &SessionStore) -> Result<Arc<Identity>, AuthError> {
    store.read().ok_or(AuthError::MissingSessionContext)
}

/// [`require`], then insist on a specific role.
///
/// # Errors
///
/// Returns [`AuthError::MissingSessionContext`] when no identity is held and
/// [`AuthError::Forbidden`] when the role differs.
pub fn require_role(store: &SessionStore, required: Role) -> Result<Arc<Identity>, AuthError> {
    let identity = require(store)?;
    let actual = identity.role();
    if actual != required {
        return Err(AuthError::Forbidden { required, actual });
    }
    Ok(identity)
}

#[cfg(test)]
mod tests {
    use tur_core::{Capabilities, RoleProfile};

    use super::*;

    fn admin() -> Identity {
        Identity {
            id: "1".into(),
            email: "admin@turismo.test".into(),
            name: "Admin".into(),
            avatar: None,
            phone: None,
            profile: RoleProfile::Admin {
                permissions: vec![],
            },
        }
    }

    #[test]
    fn empty_store_fails_with_missing_context() {
        let (store, _writer) = SessionStore::new();
        assert!(matches!(
            require(&store),
            Err(AuthError::MissingSessionContext)
        ));
    }

    #[test]
    fn returns_the_held_reference() {
        let (store, writer) = SessionStore::new();
        let held = writer.set(admin());
        let got = require(&store).unwrap();
        assert!(Arc::ptr_eq(&held, &got));
    }

    #[test]
    fn empty_store_derives_no_capabilities() {
        let (store, _writer) = SessionStore::new();
        let identity = require(&store).ok();
        assert_eq!(
            Capabilities::derive(identity.as_deref()),
            Capabilities::default()
        );
    }

    #[test]
    fn require_role_rejects_other_roles() {
        let (store, writer) = SessionStore::new();
        writer.set(admin());
        assert!(require_role(&store, Role::Admin).is_ok());
        assert!(matches!(
            require_role(&store, Role::Client),
            Err(AuthError::Forbidden {
                required: Role::Client,
                actual: Role::Admin
            })
        ));
    }

    #[test]
    fn require_role_on_empty_store_is_missing_context() {
        let (store, _writer) = SessionStore::new();
        assert!(matches!(
            require_role(&store, Role::Admin),
            Err(AuthError::MissingSessionContext)
        ));
    }
}
