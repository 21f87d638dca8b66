//! # tur-api
//!
//! HTTP client for the tourism-booking API.
//!
//! Every wrapper issues exactly one request and returns the response body
//! verbatim as [`serde_json::Value`]. Nothing here validates response shapes,
//! retries, or classifies failures beyond [`ApiError`]. When the client holds
//! a session token, every request carries it as a bearer credential.
//!
//! Endpoint groups:
//! - [`catalog`]: categories, packages, entrepreneurs, hostels, products
//! - [`auth`]: login, registration, profile, email verification, password reset
//! - [`payments`]: payment initiation
//! - [`admin`]: management console endpoints

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod payments;

mod error;
mod http;

pub use error::ApiError;

use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;

/// Booking API client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for `base_url` with a per-request timeout.
    ///
    /// The base URL is not validated; an empty or malformed base surfaces as
    /// [`ApiError::Http`] on the first call.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("turismo-cli/0.1")
                .timeout(timeout)
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.into(),
            token: None,
        }
    }

    #[must_use]
    pub fn from_config(config: &tur_config::ApiConfig) -> Self {
        Self::new(
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Attach (or drop) the bearer token used on every subsequent request.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token.filter(|t| !t.is_empty());
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.set_token(Some(token.into()));
        self
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build a request against `path`, attaching the bearer token if held.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.endpoint(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Value, ApiError> {
        let resp = http::check_response(builder.send().await?).await?;
        http::body_value(resp).await
    }

    /// `GET path`, body verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        tracing::debug!(path, "GET");
        self.send(self.request(Method::GET, path)).await
    }

    /// `POST path` with a JSON body, response body verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        tracing::debug!(path, "POST");
        self.send(self.request(Method::POST, path).json(body)).await
    }
}

/// Percent-encode a caller-supplied path segment.
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
