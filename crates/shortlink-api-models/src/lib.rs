#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Shared HTTP DTOs for the Shortlink user link API.
//!
//! The dashboard encodes list requests and decodes list responses through
//! these types so the query contract lives in a single place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Path of the user link listing endpoint.
pub const USER_URLS_PATH: &str = "/api/user/url";

/// Lifecycle state of a short link.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrlState {
    /// Link redirects normally.
    Active,
    /// Link has been deactivated by its owner.
    Inactive,
}

impl UrlState {
    /// Wire value used in query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }
}

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    #[default]
    Desc,
}

impl SortDirection {
    /// Wire value used in query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Column used to order the link listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum OrderBy {
    /// Creation timestamp.
    CreatedAt,
    /// Last modification timestamp.
    #[default]
    UpdatedAt,
    /// Total redirect count.
    Clicks,
}

impl OrderBy {
    /// Wire value used in query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
            Self::Clicks => "clicks",
        }
    }
}

/// One short link owned by the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UrlSummary {
    /// Short path segment (without host).
    pub short_url: String,
    /// Redirect target.
    pub long_url: String,
    /// Current link state.
    pub state: UrlState,
    /// Total redirect count.
    #[serde(default)]
    pub clicks: u64,
    /// Whether the link points at an uploaded file.
    #[serde(default)]
    pub is_file: bool,
    /// Tags attached to the link.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-form description shown on the link page.
    #[serde(default)]
    pub description: String,
    /// Optional owner contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Paged response from the user link listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UserUrlsResponse {
    /// Rows on the requested page.
    pub urls: Vec<UrlSummary>,
    /// Total number of rows matching the filter.
    pub count: u64,
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorMessage {
    /// Human-readable failure message.
    pub message: String,
}

/// Query parameters for the user link listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserUrlsQuery {
    /// Page size.
    pub limit: u32,
    /// Row offset of the first item.
    pub offset: u64,
    /// Ordering column.
    pub order_by: OrderBy,
    /// Ordering direction.
    pub sort_direction: SortDirection,
    /// Substring match against the short link; omitted when empty.
    pub search_text: String,
    /// Tag match; omitted when empty.
    pub tags: String,
    /// Optional link state filter.
    pub state: Option<UrlState>,
    /// Optional file/link filter.
    pub is_file: Option<bool>,
}

impl UserUrlsQuery {
    /// Encode the query as a URL query string (without the leading `?`).
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs = vec![
            format!("limit={}", self.limit),
            format!("offset={}", self.offset),
            format!("orderBy={}", self.order_by.as_str()),
            format!("sortDirection={}", self.sort_direction.as_str()),
        ];
        if !self.search_text.is_empty() {
            pairs.push(format!(
                "searchText={}",
                urlencoding::encode(&self.search_text)
            ));
        }
        if !self.tags.is_empty() {
            pairs.push(format!("tags={}", urlencoding::encode(&self.tags)));
        }
        if let Some(state) = self.state {
            pairs.push(format!("state={}", state.as_str()));
        }
        if let Some(is_file) = self.is_file {
            pairs.push(format!("isFile={is_file}"));
        }
        pairs.join("&")
    }

    /// Full request path for the listing endpoint.
    #[must_use]
    pub fn to_path(&self) -> String {
        format!("{USER_URLS_PATH}?{}", self.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_omits_empty_terms_and_filters() {
        let query = UserUrlsQuery {
            limit: 10,
            offset: 20,
            ..UserUrlsQuery::default()
        };
        assert_eq!(
            query.to_query_string(),
            "limit=10&offset=20&orderBy=updatedAt&sortDirection=desc"
        );
    }

    #[test]
    fn query_string_encodes_search_terms() {
        let query = UserUrlsQuery {
            limit: 5,
            offset: 0,
            order_by: OrderBy::Clicks,
            sort_direction: SortDirection::Asc,
            search_text: "a b&c".into(),
            tags: String::new(),
            state: Some(UrlState::Inactive),
            is_file: Some(false),
        };
        assert_eq!(
            query.to_path(),
            "/api/user/url?limit=5&offset=0&orderBy=clicks&sortDirection=asc\
             &searchText=a%20b%26c&state=INACTIVE&isFile=false"
        );
    }

    #[test]
    fn tags_are_sent_without_search_text() {
        let query = UserUrlsQuery {
            limit: 10,
            tags: "vip".into(),
            ..UserUrlsQuery::default()
        };
        let encoded = query.to_query_string();
        assert!(encoded.ends_with("&tags=vip"));
        assert!(!encoded.contains("searchText"));
    }

    #[test]
    fn response_decodes_camel_case_rows() {
        let raw = r#"{
            "urls": [{
                "shortUrl": "promo",
                "longUrl": "https://example.com/promo",
                "state": "ACTIVE",
                "clicks": 42,
                "isFile": false,
                "tags": ["vip"],
                "description": "",
                "createdAt": "2024-01-02T03:04:05Z",
                "updatedAt": "2024-01-03T03:04:05Z"
            }],
            "count": 1
        }"#;
        let response: UserUrlsResponse = serde_json::from_str(raw).expect("decode response");
        assert_eq!(response.count, 1);
        let row = response.urls.first().expect("row");
        assert_eq!(row.short_url, "promo");
        assert_eq!(row.state, UrlState::Active);
        assert_eq!(row.tags, vec!["vip".to_string()]);
        assert!(row.contact_email.is_none());
    }

    #[test]
    fn enum_wire_values_match_serde() {
        assert_eq!(
            serde_json::to_string(&OrderBy::CreatedAt).expect("encode"),
            format!("\"{}\"", OrderBy::CreatedAt.as_str())
        );
        assert_eq!(
            serde_json::to_string(&SortDirection::Desc).expect("encode"),
            format!("\"{}\"", SortDirection::Desc.as_str())
        );
        assert_eq!(
            serde_json::to_string(&UrlState::Inactive).expect("encode"),
            format!("\"{}\"", UrlState::Inactive.as_str())
        );
    }
}
