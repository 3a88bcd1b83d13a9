//! User link table state and its reducer.
//!
//! # Design
//! - Committed search terms change only through dispatched actions.
//! - Partial config updates mirror the server's optional query fields.
//! - Fetches are tagged with a generation so late responses cannot win.

use crate::core::config::DEFAULT_ROWS_PER_PAGE;
use crate::features::links::actions::{FetchRequest, UserAction};
use shortlink_api_models::{OrderBy, SortDirection, UrlState, UrlSummary, UserUrlsQuery};

/// Optional filters applied on top of the search terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct UrlFilter {
    /// Only links in this state.
    pub state: Option<UrlState>,
    /// Only file links (`true`) or plain links (`false`).
    pub is_file: Option<bool>,
}

/// Table configuration shared by the toolbar, the filter panel and the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlTableConfig {
    /// Page size.
    pub rows_per_page: u32,
    /// Zero-based page index.
    pub page_number: u32,
    /// Ordering direction.
    pub sort_direction: SortDirection,
    /// Ordering column.
    pub order_by: OrderBy,
    /// Search by tag when true, by link otherwise.
    pub is_tag: bool,
    /// Live text in the search field, not yet committed.
    pub search_input: String,
    /// Committed link search term.
    pub search_text: String,
    /// Committed tag search term.
    pub tags: String,
    /// State/type filters.
    pub filter: UrlFilter,
}

impl Default for UrlTableConfig {
    fn default() -> Self {
        Self {
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            page_number: 0,
            sort_direction: SortDirection::default(),
            order_by: OrderBy::default(),
            is_tag: false,
            search_input: String::new(),
            search_text: String::new(),
            tags: String::new(),
            filter: UrlFilter::default(),
        }
    }
}

impl UrlTableConfig {
    /// Listing query for the current configuration.
    #[must_use]
    pub fn to_query(&self) -> UserUrlsQuery {
        UserUrlsQuery {
            limit: self.rows_per_page,
            offset: u64::from(self.page_number) * u64::from(self.rows_per_page),
            order_by: self.order_by,
            sort_direction: self.sort_direction,
            search_text: self.search_text.clone(),
            tags: self.tags.clone(),
            state: self.filter.state,
            is_file: self.filter.is_file,
        }
    }
}

/// Partial update for [`UrlTableConfig`]; absent fields are left untouched.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct UrlTableConfigPatch {
    /// New page size.
    pub rows_per_page: Option<u32>,
    /// New page index.
    pub page_number: Option<u32>,
    /// New ordering direction.
    pub sort_direction: Option<SortDirection>,
    /// New ordering column.
    pub order_by: Option<OrderBy>,
    /// New search mode.
    pub is_tag: Option<bool>,
    /// New live search text.
    pub search_input: Option<String>,
    /// New committed link search term.
    pub search_text: Option<String>,
    /// New committed tag search term.
    pub tags: Option<String>,
    /// Replacement filters.
    pub filter: Option<UrlFilter>,
}

impl UrlTableConfigPatch {
    /// Patch that only updates the live search text.
    #[must_use]
    pub fn search_input(value: impl Into<String>) -> Self {
        Self {
            search_input: Some(value.into()),
            ..Self::default()
        }
    }

    /// Patch that only updates the search mode.
    #[must_use]
    pub fn is_tag(is_tag: bool) -> Self {
        Self {
            is_tag: Some(is_tag),
            ..Self::default()
        }
    }

    /// Patch that only moves to another page.
    #[must_use]
    pub fn page(page_number: u32) -> Self {
        Self {
            page_number: Some(page_number),
            ..Self::default()
        }
    }
}

/// Merge a partial update into the config.
pub fn apply_patch(config: &mut UrlTableConfig, patch: UrlTableConfigPatch) {
    let UrlTableConfigPatch {
        rows_per_page,
        page_number,
        sort_direction,
        order_by,
        is_tag,
        search_input,
        search_text,
        tags,
        filter,
    } = patch;
    if let Some(value) = rows_per_page {
        config.rows_per_page = value;
    }
    if let Some(value) = page_number {
        config.page_number = value;
    }
    if let Some(value) = sort_direction {
        config.sort_direction = value;
    }
    if let Some(value) = order_by {
        config.order_by = value;
    }
    if let Some(value) = is_tag {
        config.is_tag = value;
    }
    if let Some(value) = search_input {
        config.search_input = value;
    }
    if let Some(value) = search_text {
        config.search_text = value;
    }
    if let Some(value) = tags {
        config.tags = value;
    }
    if let Some(value) = filter {
        config.filter = value;
    }
}

/// User link slice stored in the app store.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct UserLinksState {
    /// Table configuration (search, paging, sort, filters).
    pub table_config: UrlTableConfig,
    /// Rows on the current page.
    pub urls: Vec<UrlSummary>,
    /// Total rows matching the committed filter.
    pub url_count: u64,
    /// Whether a fetch is in flight.
    pub is_fetching_urls: bool,
    /// Message from the last failed fetch.
    pub fetch_error: Option<String>,
    /// Generation of the most recent fetch request.
    pub last_request: u64,
}

/// Apply an action to the link slice.
///
/// Returns the fetch the effect layer must run for [`UserAction::GetUrlsForUser`].
pub fn reduce(state: &mut UserLinksState, action: UserAction) -> Option<FetchRequest> {
    match action {
        UserAction::SetUrlTableConfig(patch) => {
            apply_patch(&mut state.table_config, patch);
            None
        }
        UserAction::IsFetchingUrls(flag) => {
            state.is_fetching_urls = flag;
            None
        }
        UserAction::GetUrlsForUser => {
            state.last_request += 1;
            Some(FetchRequest {
                generation: state.last_request,
                query: state.table_config.to_query(),
            })
        }
        UserAction::UrlsLoaded {
            generation,
            urls,
            count,
        } => {
            if generation == state.last_request {
                state.urls = urls;
                state.url_count = count;
                state.fetch_error = None;
                state.is_fetching_urls = false;
            }
            None
        }
        UserAction::UrlsFailed {
            generation,
            message,
        } => {
            if generation == state.last_request {
                state.fetch_error = Some(message);
                state.is_fetching_urls = false;
            }
            None
        }
    }
}

/// Whether the table is waiting on rows, including before the first request.
#[must_use]
pub const fn is_loading(state: &UserLinksState) -> bool {
    state.is_fetching_urls || state.last_request == 0
}

/// Whether the table should show its empty placeholder.
///
/// Only true once a request has completed with no rows and no error.
#[must_use]
pub fn shows_empty_state(state: &UserLinksState) -> bool {
    !is_loading(state) && state.fetch_error.is_none() && state.urls.is_empty()
}

/// Editable copy of the sort/filter settings behind the filter panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FilterSortDraft {
    /// Ordering column.
    pub order_by: OrderBy,
    /// Ordering direction.
    pub sort_direction: SortDirection,
    /// Link state filter.
    pub state: Option<UrlState>,
    /// File/link filter.
    pub is_file: Option<bool>,
}

impl FilterSortDraft {
    /// Seed the draft from the live config.
    #[must_use]
    pub const fn from_config(config: &UrlTableConfig) -> Self {
        Self {
            order_by: config.order_by,
            sort_direction: config.sort_direction,
            state: config.filter.state,
            is_file: config.filter.is_file,
        }
    }

    /// Patch that applies the draft and returns to the first page.
    #[must_use]
    pub const fn to_patch(self) -> UrlTableConfigPatch {
        UrlTableConfigPatch {
            rows_per_page: None,
            page_number: Some(0),
            sort_direction: Some(self.sort_direction),
            order_by: Some(self.order_by),
            is_tag: None,
            search_input: None,
            search_text: None,
            tags: None,
            filter: Some(UrlFilter {
                state: self.state,
                is_file: self.is_file,
            }),
        }
    }

    /// Toggle a state filter: picking the active choice clears it.
    #[must_use]
    pub fn toggle_state(mut self, state: UrlState) -> Self {
        self.state = if self.state == Some(state) {
            None
        } else {
            Some(state)
        };
        self
    }

    /// Toggle a file/link filter: picking the active choice clears it.
    #[must_use]
    pub fn toggle_is_file(mut self, is_file: bool) -> Self {
        self.is_file = if self.is_file == Some(is_file) {
            None
        } else {
            Some(is_file)
        };
        self
    }
}

/// Number of pages needed to show `count` rows.
#[must_use]
pub fn page_count(count: u64, rows_per_page: u32) -> u64 {
    if rows_per_page == 0 {
        return 0;
    }
    count.div_ceil(u64::from(rows_per_page))
}
