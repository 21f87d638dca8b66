//! Public catalog endpoints: categories, packages, entrepreneurs, hostels,
//! and products.

use serde_json::Value;

use crate::{ApiClient, ApiError, segment};

impl ApiClient {
    /// `GET /categories`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not success.
    pub async fn list_categories(&self) -> Result<Value, ApiError> {
        self.get("categories").await
    }

    /// `GET /categories/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not success.
    pub async fn get_category(&self, id: &str) -> Result<Value, ApiError> {
        self.get(&format!("categories/{}", segment(id))).await
    }

    /// `GET /categories/{id}/packages`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not success.
    pub async fn list_category_packages(&self, category_id: &str) -> Result<Value, ApiError> {
        self.get(&format!("categories/{}/packages", segment(category_id)))
            .await
    }

    /// `GET /packages`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not success.
    pub async fn list_packages(&self) -> Result<Value, ApiError> {
        self.get("packages").await
    }

    /// `GET /packages/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not success.
    pub async fn get_package(&self, id: &str) -> Result<Value, ApiError> {
        self.get(&format!("packages/{}", segment(id))).await
    }

    /// `GET /entrepreneurs`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not success.
    pub async fn list_entrepreneurs(&self) -> Result<Value, ApiError> {
        self.get("entrepreneurs").await
    }

    /// `GET /entrepreneurs/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not success.
    pub async fn get_entrepreneur(&self, id: &str) -> Result<Value, ApiError> {
        self.get(&format!("entrepreneurs/{}", segment(id))).await
    }

    /// `GET /entrepreneurs/{id}/products`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not success.
    pub async fn list_entrepreneur_products(
        &self,
        entrepreneur_id: &str,
    ) -> Result<Value, ApiError> {
        self.get(&format!("entrepreneurs/{}/products", segment(entrepreneur_id)))
            .await
    }

    /// `GET /hostels`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not success.
    pub async fn list_hostels(&self) -> Result<Value, ApiError> {
        self.get("hostels").await
    }

    /// `GET /hostels/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not success.
    pub async fn get_hostel(&self, id: &str) -> Result<Value, ApiError> {
        self.get(&format!("hostels/{}", segment(id))).await
    }

    /// `GET /products`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not success.
    pub async fn list_products(&self) -> Result<Value, ApiError> {
        self.get("products").await
    }

    /// `GET /products/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not success.
    pub async fn get_product(&self, id: &str) -> Result<Value, ApiError> {
        self.get(&format!("products/{}", segment(id))).await
    }
}
