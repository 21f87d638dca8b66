//! Payment initiation.

use serde::Serialize;
use serde_json::Value;

use crate::{ApiClient, ApiError};

/// What is being paid for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "itemType", content = "itemId", rename_all = "lowercase")]
pub enum PaymentItem {
    Package(String),
    Product(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentRequest {
    #[serde(flatten)]
    pub item: PaymentItem,
    pub quantity: u32,
}

impl ApiClient {
    /// `POST /payments`. The body typically carries a checkout redirect URL;
    /// it is returned untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not success.
    pub async fn initiate_payment(&self, request: &PaymentRequest) -> Result<Value, ApiError> {
        self.post("payments", request).await
    }
}
