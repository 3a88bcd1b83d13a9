//! App-wide yewdux store.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Slices are mutated only through their feature reducers.

use crate::features::links::actions::{FetchRequest, UserAction};
use crate::features::links::state::{UserLinksState, reduce};
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Signed-in user's link table.
    pub user: UserLinksState,
}

/// Route an action to the owning slice reducer.
pub fn apply_user_action(store: &mut AppStore, action: UserAction) -> Option<FetchRequest> {
    reduce(&mut store.user, action)
}
