//! Resolved UI configuration and override parsing.
//!
//! # Design
//! - Defaults are compiled in; the browser layer may override them.
//! - Parsing is pure so invalid overrides are rejected without touching storage.

/// Quiet period before a typed search is committed.
pub const SEARCH_TIMEOUT_MS: u32 = 1000;

/// Default page size for the link table.
pub const DEFAULT_ROWS_PER_PAGE: u32 = 10;

/// Upper bound accepted for a search timeout override.
pub const MAX_SEARCH_TIMEOUT_MS: u32 = 10_000;

/// Fallback API origin when the window location cannot be read.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Configuration consumed by the dashboard shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    /// Origin prefixed to API paths.
    pub api_base_url: String,
    /// Debounce window for search submission.
    pub search_timeout_ms: u32,
    /// Page size for the link table.
    pub rows_per_page: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            search_timeout_ms: SEARCH_TIMEOUT_MS,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl UiConfig {
    /// Apply a raw search timeout override, keeping the default when invalid.
    ///
    /// Returns `true` when the override was accepted.
    pub fn apply_search_timeout(&mut self, raw: &str) -> bool {
        match parse_search_timeout(raw) {
            Some(value) => {
                self.search_timeout_ms = value;
                true
            }
            None => false,
        }
    }
}

/// Parse a timeout override in milliseconds.
#[must_use]
pub fn parse_search_timeout(raw: &str) -> Option<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|value| *value <= MAX_SEARCH_TIMEOUT_MS)
}

/// Strip trailing slashes so paths can be appended verbatim.
#[must_use]
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
