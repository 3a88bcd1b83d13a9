//! Store-backed dispatcher that runs link fetches.
//!
//! # Design
//! - Reducers stay pure; this layer performs the requested fetch.
//! - Completions are dispatched back with their request generation.

use crate::core::store::{AppStore, apply_user_action};
use crate::features::links::actions::{FetchRequest, LinkDispatch, UserAction};
use crate::features::links::api::fetch_urls_for_user;
use crate::features::links::state::UrlTableConfig;
use crate::services::api::ApiClient;
use gloo::console;
use std::rc::Rc;
use yewdux::prelude::Dispatch;

/// [`LinkDispatch`] over the app store.
#[derive(Clone)]
pub(crate) struct StoreDispatch {
    store: Dispatch<AppStore>,
    client: Rc<ApiClient>,
}

impl StoreDispatch {
    pub(crate) fn new(client: Rc<ApiClient>) -> Self {
        Self {
            store: Dispatch::<AppStore>::new(),
            client,
        }
    }

    fn spawn_fetch(&self, request: FetchRequest) {
        let client = Rc::clone(&self.client);
        let this = self.clone();
        yew::platform::spawn_local(async move {
            let FetchRequest { generation, query } = request;
            let outcome = match fetch_urls_for_user(&client, &query).await {
                Ok(response) => UserAction::UrlsLoaded {
                    generation,
                    urls: response.urls,
                    count: response.count,
                },
                Err(err) => {
                    let message = err.to_string();
                    console::error!("link fetch failed", message.clone());
                    UserAction::UrlsFailed {
                        generation,
                        message,
                    }
                }
            };
            this.dispatch(outcome);
        });
    }
}

impl LinkDispatch for StoreDispatch {
    fn table_config(&self) -> UrlTableConfig {
        self.store.get().user.table_config.clone()
    }

    fn dispatch(&self, action: UserAction) {
        let mut request = None;
        self.store.reduce_mut(|store| {
            request = apply_user_action(store, action);
        });
        if let Some(request) = request {
            self.spawn_fetch(request);
        }
    }
}
