//! Pure search toolbar helpers.
//!
//! # Design
//! - Field selection at commit time is a pure function of mode and value.
//! - Keyboard handling maps keys to outcomes; the view performs the DOM work.

use crate::features::links::actions::{UserAction, refetch_with};
use crate::features::links::state::UrlTableConfigPatch;
use shortlink_api_models::{OrderBy, SortDirection, UrlState};

/// What the search field matches against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMode {
    /// Match short links.
    Link,
    /// Match tags.
    Tag,
}

impl SearchMode {
    /// Modes in selector order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Link, Self::Tag]
    }

    /// Mode for the stored `is_tag` flag.
    #[must_use]
    pub const fn from_is_tag(is_tag: bool) -> Self {
        if is_tag { Self::Tag } else { Self::Link }
    }

    /// Stored flag for this mode.
    #[must_use]
    pub const fn is_tag(self) -> bool {
        matches!(self, Self::Tag)
    }

    /// Selector label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Link => "Link",
            Self::Tag => "Tag",
        }
    }

    /// Search field placeholder.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Link => "Search links",
            Self::Tag => "Search tags",
        }
    }
}

/// How the mode label renders in the toolbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeLabel {
    /// Icon only, for narrow viewports.
    Icon(SearchMode),
    /// Text label.
    Text(&'static str),
}

/// Pick the mode label for the viewport.
#[must_use]
pub const fn mode_label(mode: SearchMode, narrow: bool) -> ModeLabel {
    if narrow {
        ModeLabel::Icon(mode)
    } else {
        ModeLabel::Text(mode.label())
    }
}

/// Committed search terms; at most one is non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommittedSearch {
    /// Link search term.
    pub search_text: String,
    /// Tag search term.
    pub tags: String,
}

/// Route the pending value to the field matching the mode.
#[must_use]
pub fn committed_search(is_tag: bool, value: &str) -> CommittedSearch {
    if is_tag {
        CommittedSearch {
            search_text: String::new(),
            tags: value.to_string(),
        }
    } else {
        CommittedSearch {
            search_text: value.to_string(),
            tags: String::new(),
        }
    }
}

/// Actions dispatched when a debounced search commits.
#[must_use]
pub fn commit_actions(is_tag: bool, value: &str) -> [UserAction; 3] {
    let CommittedSearch { search_text, tags } = committed_search(is_tag, value);
    refetch_with(UrlTableConfigPatch {
        search_text: Some(search_text),
        tags: Some(tags),
        page_number: Some(0),
        ..UrlTableConfigPatch::default()
    })
}

/// Actions dispatched when the user picks a search mode.
#[must_use]
pub fn mode_change_actions(mode: SearchMode) -> [UserAction; 2] {
    [
        UserAction::SetUrlTableConfig(UrlTableConfigPatch::is_tag(mode.is_tag())),
        UserAction::SetUrlTableConfig(UrlTableConfigPatch::search_input("")),
    ]
}

/// Keys the search field handles itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchKeyOutcome {
    /// Empty the field and drop focus.
    ClearAndBlur,
    /// Drop focus; the pending commit keeps its schedule.
    Blur,
}

/// Map a `KeyboardEvent.key` value to a search field outcome.
#[must_use]
pub fn interpret_search_key(key: &str) -> Option<SearchKeyOutcome> {
    match key {
        "Escape" => Some(SearchKeyOutcome::ClearAndBlur),
        "Enter" => Some(SearchKeyOutcome::Blur),
        _ => None,
    }
}

/// Action for a blur event; `None` when the text already matches.
#[must_use]
pub fn blur_update(current: &str, field_text: &str) -> Option<UserAction> {
    (current != field_text).then(|| {
        UserAction::SetUrlTableConfig(UrlTableConfigPatch::search_input(field_text))
    })
}

/// Sort columns offered by the filter panel.
pub const SORT_OPTIONS: [(OrderBy, &str); 3] = [
    (OrderBy::UpdatedAt, "Recently updated"),
    (OrderBy::CreatedAt, "Date created"),
    (OrderBy::Clicks, "Most popular"),
];

/// Link state filter choices.
pub const STATE_OPTIONS: [(UrlState, &str); 2] =
    [(UrlState::Active, "Active"), (UrlState::Inactive, "Inactive")];

/// Link type filter choices, keyed by `is_file`.
pub const TYPE_OPTIONS: [(bool, &str); 2] = [(false, "Link"), (true, "File")];

/// Label for a sort direction toggle.
#[must_use]
pub const fn direction_label(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Asc => "Ascending",
        SortDirection::Desc => "Descending",
    }
}

/// The other sort direction.
#[must_use]
pub const fn flip_direction(direction: SortDirection) -> SortDirection {
    match direction {
        SortDirection::Asc => SortDirection::Desc,
        SortDirection::Desc => SortDirection::Asc,
    }
}
