//! The closed role enumeration.
//!
//! Wire strings are the backend's domain literals (`administrador`,
//! `emprendedor`, `cliente`). Anything else is rejected at parse time.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Role of an authenticated principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Role {
    #[serde(rename = "administrador")]
    Admin,
    #[serde(rename = "emprendedor")]
    Entrepreneur,
    #[serde(rename = "cliente")]
    Client,
}

impl Role {
    /// Every role the backend issues.
    pub const ALL: [Self; 3] = [Self::Admin, Self::Entrepreneur, Self::Client];

    /// Return the wire string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "administrador",
            Self::Entrepreneur => "emprendedor",
            Self::Client => "cliente",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| CoreError::UnknownRole(s.to_string()))
    }
}
