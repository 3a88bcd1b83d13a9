//! HTTP client helpers (REST).

use crate::core::errors::ApiError;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Client for one API origin; two clients are equal when they target the same origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ApiClient {
    pub base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&format!("{}{}", self.base_url, path))
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(response.status(), &body));
        }
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}
