//! Link table actions and the dispatch seam.
//!
//! # Design
//! - Actions capture intent; the reducer applies them without side effects.
//! - Fetching is requested by action and performed by the effect layer.

use crate::features::links::state::{UrlTableConfig, UrlTableConfigPatch};
use shortlink_api_models::{UrlSummary, UserUrlsQuery};

/// Messages accepted by the user link slice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserAction {
    /// Merge a partial table configuration.
    SetUrlTableConfig(UrlTableConfigPatch),
    /// Toggle the in-flight fetch flag.
    IsFetchingUrls(bool),
    /// Fetch the current page for the signed-in user.
    GetUrlsForUser,
    /// Fetch completed successfully.
    UrlsLoaded {
        /// Generation of the request being answered.
        generation: u64,
        /// Rows on the page.
        urls: Vec<UrlSummary>,
        /// Total rows matching the filter.
        count: u64,
    },
    /// Fetch failed.
    UrlsFailed {
        /// Generation of the request being answered.
        generation: u64,
        /// Displayable failure message.
        message: String,
    },
}

/// Fetch the effect layer must perform after [`UserAction::GetUrlsForUser`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    /// Generation used to discard superseded responses.
    pub generation: u64,
    /// Query derived from the table config at dispatch time.
    pub query: UserUrlsQuery,
}

/// Read/dispatch access to the link slice.
pub trait LinkDispatch {
    /// Snapshot of the table configuration as currently stored.
    fn table_config(&self) -> UrlTableConfig;

    /// Deliver an action to the store.
    fn dispatch(&self, action: UserAction);

    /// Deliver actions in order.
    fn dispatch_all<I>(&self, actions: I)
    where
        I: IntoIterator<Item = UserAction>,
        Self: Sized,
    {
        for action in actions {
            self.dispatch(action);
        }
    }
}

/// Actions that refresh the table after a config change.
///
/// The fetching flag is always raised before the fetch is requested.
#[must_use]
pub fn refetch_with(patch: UrlTableConfigPatch) -> [UserAction; 3] {
    [
        UserAction::IsFetchingUrls(true),
        UserAction::SetUrlTableConfig(patch),
        UserAction::GetUrlsForUser,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refetch_raises_flag_before_fetch() {
        let actions = refetch_with(UrlTableConfigPatch::page(2));
        assert_eq!(actions[0], UserAction::IsFetchingUrls(true));
        assert_eq!(
            actions[1],
            UserAction::SetUrlTableConfig(UrlTableConfigPatch::page(2))
        );
        assert_eq!(actions[2], UserAction::GetUrlsForUser);
    }
}
