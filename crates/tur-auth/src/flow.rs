//! Authentication flow: the only code that holds the [`SessionWriter`].
//!
//! ```text
//! absent ──login/restore──▶ present ──logout──▶ absent
//! ```

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tur_api::ApiClient;
use tur_api::auth::{LoginRequest, ResetPasswordRequest};
use tur_core::{Identity, SessionToken, TokenPurpose};

use crate::error::AuthError;
use crate::session::SessionWriter;
use crate::token;
use crate::token_store::TokenStore;

/// Log in with email and password.
///
/// Posts the credentials, accepts the returned token only if it is a session
/// token, fetches the bearer's profile, persists the token, and sets the
/// session. The client keeps the token attached for later calls. On failure
/// the client's previous token is put back and the session is unchanged.
///
/// # Errors
///
/// Propagates API errors unchanged. Returns `InvalidResponse` when the login
/// body has no token or the profile does not match it, and
/// `Core(SingleUseCredential)` when the backend hands back a single-use token.
pub async fn login(
    api: &mut ApiClient,
    writer: &SessionWriter,
    tokens: &TokenStore,
    request: &LoginRequest,
) -> Result<Arc<Identity>, AuthError> {
    let body = api.login(request).await?;
    let jwt = body
        .get("token")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AuthError::InvalidResponse("login response missing 'token'".into()))?
        .to_string();

    let session = token::decode_session(&jwt)?;
    let previous = api.token().map(str::to_string);
    let identity = attach_and_fetch(api, &jwt, &session).await?;
    if let Err(error) = tokens.store(&jwt) {
        api.set_token(previous);
        return Err(error);
    }
    tracing::info!(user_id = %identity.id, role = %identity.role(), "logged in");
    Ok(writer.set(identity))
}

/// Re-establish a session from a previously stored token.
///
/// Single-use and expired tokens are refused. On any error the session and
/// the client's token are left as they were.
///
/// # Errors
///
/// `InvalidToken`, `Core(SingleUseCredential)`, `TokenExpired`, API errors,
/// or `InvalidResponse` for a mismatched profile.
pub async fn restore(
    api: &mut ApiClient,
    writer: &SessionWriter,
    jwt: &str,
    expiry_buffer_secs: i64,
) -> Result<Arc<Identity>, AuthError> {
    let payload = token::decode_payload(jwt)?;
    let session = payload.clone().into_session().inspect_err(|error| {
        tracing::warn!(%error, "stored token is not a session token; ignoring it");
    })?;
    if payload.is_expired(Utc::now(), expiry_buffer_secs) {
        tracing::warn!(
            expires_at = ?payload.expires_at(),
            "stored session token expires within {expiry_buffer_secs}s; run `tur auth login`",
        );
        return Err(AuthError::TokenExpired);
    }

    let identity = attach_and_fetch(api, jwt, &session).await?;
    Ok(writer.set(identity))
}

/// Clear the session, detach the token, and delete stored credentials.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn logout(
    api: &mut ApiClient,
    writer: &SessionWriter,
    tokens: &TokenStore,
) -> Result<(), AuthError> {
    writer.clear();
    api.set_token(None);
    tokens.delete()
}

/// Confirm an email address with a single-use verification token.
///
/// # Errors
///
/// `InvalidToken` when the token is not an `email_verification` token; API
/// errors otherwise.
pub async fn verify_email(api: &ApiClient, jwt: &str) -> Result<Value, AuthError> {
    token::decode_single_use(jwt, TokenPurpose::EmailVerification)?;
    Ok(api.verify_email(jwt).await?)
}

/// Set a new password with a single-use reset token.
///
/// # Errors
///
/// `InvalidToken` when the token is not a `password_reset` token; API errors
/// otherwise.
pub async fn reset_password(api: &ApiClient, jwt: &str, password: &str) -> Result<Value, AuthError> {
    token::decode_single_use(jwt, TokenPurpose::PasswordReset)?;
    Ok(api
        .reset_password(&ResetPasswordRequest {
            token: jwt.to_string(),
            password: password.to_string(),
        })
        .await?)
}

async fn attach_and_fetch(
    api: &mut ApiClient,
    jwt: &str,
    session: &SessionToken,
) -> Result<Identity, AuthError> {
    let previous = api.token().map(str::to_string);
    api.set_token(Some(jwt.to_string()));
    let result = fetch_identity(api, session).await;
    if result.is_err() {
        api.set_token(previous);
    }
    result
}

async fn fetch_identity(api: &ApiClient, session: &SessionToken) -> Result<Identity, AuthError> {
    let body = api.me().await?;
    let user = if body.get("user").is_some_and(Value::is_object) {
        body["user"].clone()
    } else {
        body
    };
    let identity: Identity = serde_json::from_value(user)
        .map_err(|e| AuthError::InvalidResponse(format!("profile: {e}")))?;

    if identity.id != session.user_id() {
        return Err(AuthError::InvalidResponse(format!(
            "profile {} does not belong to token user {}",
            identity.id,
            session.user_id()
        )));
    }
    if let Some(role) = session.role() {
        if role != identity.role() {
            tracing::warn!(
                token_role = %role,
                profile_role = %identity.role(),
                "token role differs from profile role; using profile"
            );
        }
    }
    Ok(identity)
}
