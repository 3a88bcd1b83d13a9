//! API helpers for the user link table.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Reuse the shared ApiClient for error mapping.

use crate::core::errors::ApiError;
use crate::services::api::ApiClient;
use shortlink_api_models::{UserUrlsQuery, UserUrlsResponse};

/// Fetch one page of the signed-in user's links.
pub(crate) async fn fetch_urls_for_user(
    client: &ApiClient,
    query: &UserUrlsQuery,
) -> Result<UserUrlsResponse, ApiError> {
    client.get_json(&query.to_path()).await
}
