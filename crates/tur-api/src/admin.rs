//! Management console endpoints. The backend enforces authorization; the
//! client gates these behind the administrator capability before calling.

use serde_json::Value;

use crate::{ApiClient, ApiError, segment};

impl ApiClient {
    /// `GET /admin/users`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not success.
    pub async fn admin_list_users(&self) -> Result<Value, ApiError> {
        self.get("admin/users").await
    }

    /// `GET /admin/users/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not success.
    pub async fn admin_get_user(&self, id: &str) -> Result<Value, ApiError> {
        self.get(&format!("admin/users/{}", segment(id))).await
    }

    /// `POST /admin/categories` with a caller-built body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not success.
    pub async fn admin_create_category(&self, body: &Value) -> Result<Value, ApiError> {
        self.post("admin/categories", body).await
    }

    /// `POST /admin/packages` with a caller-built body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not success.
    pub async fn admin_create_package(&self, body: &Value) -> Result<Value, ApiError> {
        self.post("admin/packages", body).await
    }

    /// `POST /admin/hostels` with a caller-built body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not success.
    pub async fn admin_create_hostel(&self, body: &Value) -> Result<Value, ApiError> {
        self.post("admin/hostels", body).await
    }
}
