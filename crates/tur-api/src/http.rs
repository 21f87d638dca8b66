//! Shared HTTP response helpers.

use crate::error::ApiError;

/// Pass a success response through; turn anything else into
/// [`ApiError::Status`] carrying the body verbatim.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if !resp.status().is_success() {
        return Err(ApiError::Status {
            status: resp.status().as_u16(),
            body: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Read a body as JSON without validating its shape. An empty body is `null`.
pub async fn body_value(resp: reqwest::Response) -> Result<serde_json::Value, ApiError> {
    let bytes = resp.bytes().await?;
    if bytes.is_empty() {
        return Ok(serde_json::Value::Null);
    }
    Ok(serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())))
}
