use schemars::JsonSchema;
use serde::Serialize;

use crate::identity::Identity;
use crate::role::Role;

/// Capability flags projected from the current role.
///
/// Every flag is computed from `current_role` in one `match`, so at most one
/// flag is ever true and exactly one is true whenever a role is present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub is_admin: bool,
    pub is_entrepreneur: bool,
    pub is_client: bool,
    pub current_role: Option<Role>,
}

impl Capabilities {
    /// Project an optional identity. Absence yields all flags false.
    #[must_use]
    pub fn derive(identity: Option<&Identity>) -> Self {
        Self::from_role(identity.map(Identity::role))
    }

    #[must_use]
    pub const fn from_role(role: Option<Role>) -> Self {
        let (is_admin, is_entrepreneur, is_client) = match role {
            Some(Role::Admin) => (true, false, false),
            Some(Role::Entrepreneur) => (false, true, false),
            Some(Role::Client) => (false, false, true),
            None => (false, false, false),
        };
        Self {
            is_admin,
            is_entrepreneur,
            is_client,
            current_role: role,
        }
    }

    /// Number of flags set. Zero or one.
    #[must_use]
    pub fn flag_count(&self) -> usize {
        [self.is_admin, self.is_entrepreneur, self.is_client]
            .into_iter()
            .filter(|flag| *flag)
            .count()
    }
}
