//! Persistence and environment helpers for the app shell.

use crate::core::config::{DEFAULT_API_BASE_URL, UiConfig, normalize_base_url};
use crate::features::links::logic::SearchMode;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use serde::Serialize;

pub(crate) const SEARCH_MODE_KEY: &str = "shortlink.search_mode";
pub(crate) const SEARCH_TIMEOUT_KEY: &str = "shortlink.search_timeout_ms";

/// Resolve the shell configuration from compiled defaults and stored overrides.
pub(crate) fn load_ui_config() -> UiConfig {
    let mut config = UiConfig {
        api_base_url: api_base_url(),
        ..UiConfig::default()
    };
    if let Ok(raw) = LocalStorage::get::<String>(SEARCH_TIMEOUT_KEY)
        && !config.apply_search_timeout(&raw)
    {
        console::warn!(format!(
            "ignoring invalid {SEARCH_TIMEOUT_KEY} override {raw:?}; using {} ms",
            config.search_timeout_ms
        ));
    }
    config
}

pub(crate) fn load_search_mode() -> SearchMode {
    if let Ok(value) = LocalStorage::get::<String>(SEARCH_MODE_KEY) {
        return match value.as_str() {
            "tag" => SearchMode::Tag,
            _ => SearchMode::Link,
        };
    }
    SearchMode::Link
}

pub(crate) fn persist_search_mode(mode: SearchMode) {
    set_storage(
        SEARCH_MODE_KEY,
        match mode {
            SearchMode::Link => "link",
            SearchMode::Tag => "tag",
        },
    );
}

pub(crate) fn api_base_url() -> String {
    window()
        .location()
        .origin()
        .map(|origin| normalize_base_url(&origin))
        .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(action: &str, key: &str, message: &str) {
    console::error!(format!("storage {action} failed for {key}: {message}"));
}
