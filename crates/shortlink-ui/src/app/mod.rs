//! App shell: configuration, responsive state, and the link dashboard.
//!
//! # Design
//! - Configuration and the API client are resolved once per boot.
//! - Persisted preferences are pushed into the store on mount.

use crate::core::breakpoints::{Breakpoint, for_width};
use crate::core::store::{AppStore, apply_user_action};
use crate::features::links::actions::UserAction;
use crate::features::links::state::UrlTableConfigPatch;
use crate::features::links::view::{LinkTable, SearchToolbar};
use crate::services::api::ApiClient;
use gloo::events::EventListener;
use gloo::utils::window;
use preferences::{load_search_mode, load_ui_config, persist_search_mode};
use yew::prelude::*;
use yewdux::prelude::Dispatch;

mod preferences;

#[function_component(ShortlinkApp)]
pub(crate) fn shortlink_app() -> Html {
    let config = use_memo(|_| load_ui_config(), ());
    let client = {
        let base_url = config.api_base_url.clone();
        use_memo(move |_| ApiClient::new(base_url), ())
    };
    let breakpoint = use_state(current_breakpoint);

    {
        let rows_per_page = config.rows_per_page;
        use_effect_with_deps(
            move |_| {
                let patch = UrlTableConfigPatch {
                    rows_per_page: Some(rows_per_page),
                    is_tag: Some(load_search_mode().is_tag()),
                    ..UrlTableConfigPatch::default()
                };
                Dispatch::<AppStore>::new().reduce_mut(|store| {
                    let _ = apply_user_action(store, UserAction::SetUrlTableConfig(patch));
                });
                || ()
            },
            (),
        );
    }
    {
        let breakpoint = breakpoint.clone();
        use_effect_with_deps(
            move |_| {
                let handler = EventListener::new(&window(), "resize", move |_event| {
                    let bp = current_breakpoint();
                    if bp != *breakpoint {
                        breakpoint.set(bp);
                    }
                });
                move || drop(handler)
            },
            (),
        );
    }

    let on_mode_change = Callback::from(persist_search_mode);

    html! {
        <main class="shortlink-app container mx-auto p-4 space-y-4" data-breakpoint={breakpoint.name}>
            <SearchToolbar
                client={client.clone()}
                search_timeout_ms={config.search_timeout_ms}
                narrow={breakpoint.is_narrow()}
                on_mode_change={on_mode_change} />
            <LinkTable client={client} />
        </main>
    }
}

fn current_breakpoint() -> Breakpoint {
    let width = window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .map_or(1280, |w| w.clamp(0.0, f64::from(u16::MAX)) as u16);
    for_width(width)
}

/// Mount the dashboard on `#root`, falling back to `<body>`.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<ShortlinkApp>::with_root(root).render();
    } else {
        yew::Renderer::<ShortlinkApp>::new().render();
    }
}
