//! Authentication token payloads.
//!
//! A payload with a `purpose` is a single-use credential (email verification
//! or password reset). Session code only ever accepts a [`SessionToken`],
//! which can be obtained from a payload through [`TokenPayload::into_session`]
//! and nothing else.

use std::fmt;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::role::Role;

/// Single-use purpose tag carried by non-session tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TokenPurpose {
    EmailVerification,
    PasswordReset,
}

impl TokenPurpose {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmailVerification => "email_verification",
            Self::PasswordReset => "password_reset",
        }
    }
}

impl fmt::Display for TokenPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded body of an authentication token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TokenPayload {
    pub userid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<TokenPurpose>,
    /// Expiry, seconds since epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// How a payload may be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "purpose", rename_all = "snake_case")]
pub enum TokenKind {
    Session,
    SingleUse(TokenPurpose),
}

impl TokenPayload {
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self.purpose {
            Some(purpose) => TokenKind::SingleUse(purpose),
            None => TokenKind::Session,
        }
    }

    /// Expiry as a timestamp. `None` when the token carries no `exp` or it is
    /// out of range.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    /// True when the token expires at or before `now + buffer_secs`.
    ///
    /// Tokens without `exp` never expire client-side. A buffer that pushes
    /// the horizon past the representable range counts as expired.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>, buffer_secs: i64) -> bool {
        let Some(expires_at) = self.expires_at() else {
            return false;
        };
        chrono::TimeDelta::try_seconds(buffer_secs)
            .and_then(|buffer| now.checked_add_signed(buffer))
            .map_or(buffer_secs > 0, |horizon| expires_at <= horizon)
    }

    /// Accept this payload as a session token.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SingleUseCredential`] when the payload carries a
    /// purpose.
    pub fn into_session(self) -> Result<SessionToken, CoreError> {
        if let Some(purpose) = self.purpose {
            return Err(CoreError::SingleUseCredential { purpose });
        }
        let expires_at = self.expires_at();
        Ok(SessionToken {
            user_id: self.userid,
            role: self.role,
            expires_at,
        })
    }
}

/// A payload proven to be a normal session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    user_id: String,
    role: Option<Role>,
    expires_at: Option<DateTime<Utc>>,
}

impl SessionToken {
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        self.role
    }

    #[must_use]
    pub const fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }
}
