//! Authentication endpoints.
//!
//! These only move bodies back and forth. Token decoding and session state
//! belong to `tur-auth`.

use serde::Serialize;
use serde_json::Value;

use crate::{ApiClient, ApiError};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Wire role string (`cliente`, `emprendedor`).
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

impl ApiClient {
    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not success.
    pub async fn login(&self, request: &LoginRequest) -> Result<Value, ApiError> {
        self.post("auth/login", request).await
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not success.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Value, ApiError> {
        self.post("auth/register", request).await
    }

    /// `GET /auth/me`, the profile of the bearer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not success.
    pub async fn me(&self) -> Result<Value, ApiError> {
        self.get("auth/me").await
    }

    /// `POST /auth/verify-email` with a single-use verification token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not success.
    pub async fn verify_email(&self, token: &str) -> Result<Value, ApiError> {
        self.post("auth/verify-email", &serde_json::json!({ "token": token }))
            .await
    }

    /// `POST /auth/forgot-password`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not success.
    pub async fn forgot_password(&self, email: &str) -> Result<Value, ApiError> {
        self.post("auth/forgot-password", &serde_json::json!({ "email": email }))
            .await
    }

    /// `POST /auth/reset-password` with a single-use reset token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not success.
    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<Value, ApiError> {
        self.post("auth/reset-password", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_omits_unset_optional_fields() {
        let request = RegisterRequest {
            name: "Luis".into(),
            email: "luis@turismo.test".into(),
            password: "secret".into(),
            role: "cliente".into(),
            phone: None,
            business_name: None,
            address: Some("Calle 1".into()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["address"], "Calle 1");
        assert!(json.get("businessName").is_none());
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn register_request_uses_camel_case() {
        let request = RegisterRequest {
            name: "Marta".into(),
            email: "finca@turismo.test".into(),
            password: "secret".into(),
            role: "emprendedor".into(),
            phone: None,
            business_name: Some("Finca".into()),
            address: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["businessName"], "Finca");
    }
}
