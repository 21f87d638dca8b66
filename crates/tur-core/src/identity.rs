use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// The authenticated principal.
///
/// Produced by `tur-auth` once a login or token restore succeeds, held by the
/// session store, and read by everything else. Role-specific attributes live
/// in [`RoleProfile`], so a client never carries a permission list and an
/// administrator never carries an address.
///
/// On the wire this is the flat object returned by `GET /auth/me`; the
/// `role` key selects the profile variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(flatten)]
    pub profile: RoleProfile,
}

/// Role-conditional attributes, tagged by the wire role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "role")]
pub enum RoleProfile {
    #[serde(rename = "administrador")]
    Admin {
        #[serde(default)]
        permissions: Vec<String>,
    },
    #[serde(rename = "emprendedor")]
    Entrepreneur {
        #[serde(
            default,
            rename = "businessName",
            skip_serializing_if = "Option::is_none"
        )]
        business_name: Option<String>,
    },
    #[serde(rename = "cliente")]
    Client {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address: Option<String>,
    },
}

impl RoleProfile {
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Admin { .. } => Role::Admin,
            Self::Entrepreneur { .. } => Role::Entrepreneur,
            Self::Client { .. } => Role::Client,
        }
    }
}

impl Identity {
    /// Role of this principal, derived from the profile variant.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.profile.role()
    }

    /// Administrator permission list. Empty for every other role.
    #[must_use]
    pub fn permissions(&self) -> &[String] {
        match &self.profile {
            RoleProfile::Admin { permissions } => permissions,
            RoleProfile::Entrepreneur { .. } | RoleProfile::Client { .. } => &[],
        }
    }

    #[must_use]
    pub fn business_name(&self) -> Option<&str> {
        match &self.profile {
            RoleProfile::Entrepreneur { business_name } => business_name.as_deref(),
            RoleProfile::Admin { .. } | RoleProfile::Client { .. } => None,
        }
    }

    #[must_use]
    pub fn address(&self) -> Option<&str> {
        match &self.profile {
            RoleProfile::Client { address } => address.as_deref(),
            RoleProfile::Admin { .. } | RoleProfile::Entrepreneur { .. } => None,
        }
    }
}
