use base64::Engine as _;
use tur_core::{SessionToken, TokenPayload, TokenPurpose};

use crate::error::AuthError;

/// Decode the payload segment of a JWT without verifying its signature.
///
/// Signature checks belong to the backend; the client only needs the
/// payload to tell session tokens from single-use ones and to spot expiry.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` if the JWT is not three segments, the
/// payload is not base64url, or it does not match the payload shape.
pub fn decode_payload(jwt: &str) -> Result<TokenPayload, AuthError> {
    let parts: Vec<&str> = jwt.trim().split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::InvalidToken("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|e| AuthError::InvalidToken(format!("base64 decode failed: {e}")))?;
    serde_json::from_slice(&payload)
        .map_err(|e| AuthError::InvalidToken(format!("payload parse failed: {e}")))
}

/// Decode a JWT and accept it only as a session token.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` for undecodable tokens and
/// `AuthError::Core(SingleUseCredential)` for tokens carrying a purpose.
pub fn decode_session(jwt: &str) -> Result<SessionToken, AuthError> {
    Ok(decode_payload(jwt)?.into_session()?)
}

/// Decode a JWT and accept it only as a single-use token for `purpose`.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` for undecodable tokens, session tokens,
/// and tokens issued for a different purpose.
pub fn decode_single_use(jwt: &str, purpose: TokenPurpose) -> Result<TokenPayload, AuthError> {
    let payload = decode_payload(jwt)?;
    match payload.purpose {
        Some(found) if found == purpose => Ok(payload),
        Some(found) => Err(AuthError::InvalidToken(format!(
            "token is for {found}, expected {purpose}"
        ))),
        None => Err(AuthError::InvalidToken(format!(
            "session token offered where a {purpose} token is required"
        ))),
    }
}

#[cfg(test)]
pub(crate) fn make_jwt(payload: &serde_json::Value) -> String {
    let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let header = engine.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let body = engine.encode(payload.to_string());
    let signature = engine.encode("fake_sig");
    format!("{header}.{body}.{signature}")
}
