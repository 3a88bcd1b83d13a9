//! Link table feature views.
//!
//! # Design
//! - The toolbar owns the debounced submitter for its lifetime.
//! - Menu open flags are local; search state lives in the store.
//! - Key handling goes through `logic` so the DOM code only performs outcomes.

mod filter_sort;
mod mode_menu;
mod table;

pub(crate) use table::LinkTable;

use crate::components::atoms::IconButton;
use crate::components::atoms::icons::{
    IconChevronDown, IconLink, IconSearch, IconSlidersHorizontal, IconTag,
};
use crate::core::debounce::TimeoutScheduler;
use crate::core::store::AppStore;
use crate::features::links::actions::{LinkDispatch, UserAction, refetch_with};
use crate::features::links::effects::StoreDispatch;
use crate::features::links::logic::{
    ModeLabel, SearchKeyOutcome, SearchMode, blur_update, interpret_search_key, mode_change_actions,
    mode_label,
};
use crate::features::links::state::{FilterSortDraft, UrlTableConfigPatch};
use crate::features::links::submitter::SearchSubmitter;
use crate::services::api::ApiClient;
use filter_sort::FilterSortPanel;
use gloo::console;
use gloo::events::EventListener;
use mode_menu::ModeMenu;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, Node};
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct SearchToolbarProps {
    pub client: Rc<ApiClient>,
    pub search_timeout_ms: u32,
    #[prop_or_default]
    pub narrow: bool,
    #[prop_or_default]
    pub on_mode_change: Callback<SearchMode>,
}

#[function_component(SearchToolbar)]
pub(crate) fn search_toolbar(props: &SearchToolbarProps) -> Html {
    let config = use_selector(|store: &AppStore| store.user.table_config.clone());
    let dispatch = use_memo(|client| StoreDispatch::new(client.clone()), props.client.clone());
    let submitter = {
        let dispatch = (*dispatch).clone();
        let timeout = props.search_timeout_ms;
        use_mut_ref(move || SearchSubmitter::new(TimeoutScheduler, dispatch, timeout))
    };
    let mode_open = use_state(|| false);
    let panel_open = use_state(|| false);
    let root_ref = use_node_ref();
    let input_ref = use_node_ref();

    let search_input = config.search_input.clone();
    let mode = SearchMode::from_is_tag(config.is_tag);
    let narrow = props.narrow;

    {
        let submitter = submitter.clone();
        use_effect_with_deps(
            move |value: &String| {
                submitter.borrow_mut().input_changed(value.clone());
                move || submitter.borrow_mut().teardown()
            },
            search_input.clone(),
        );
    }
    {
        let input_ref = input_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(input) = input_ref.cast::<HtmlInputElement>()
                    && let Err(err) = input.focus()
                {
                    console::error!("search field focus failed", err);
                }
                || ()
            },
            (),
        );
    }
    {
        let root_ref = root_ref.clone();
        let mode_open = mode_open.clone();
        let panel_open = panel_open.clone();
        use_effect_with_deps(
            move |_| {
                let listener = EventListener::new(&gloo::utils::document(), "mousedown", move |event| {
                    let inside = root_ref.get().is_some_and(|root| {
                        event
                            .target()
                            .and_then(|target| target.dyn_into::<Node>().ok())
                            .is_some_and(|target| root.contains(Some(&target)))
                    });
                    if !inside {
                        mode_open.set(false);
                        panel_open.set(false);
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    let oninput = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                dispatch.dispatch(UserAction::SetUrlTableConfig(
                    UrlTableConfigPatch::search_input(input.value()),
                ));
            }
        })
    };
    let onblur = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: FocusEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let current = dispatch.table_config().search_input;
                if let Some(action) = blur_update(&current, &input.value()) {
                    dispatch.dispatch(action);
                }
            }
        })
    };
    let onkeydown = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: KeyboardEvent| {
            let Some(outcome) = interpret_search_key(&event.key()) else {
                return;
            };
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            if outcome == SearchKeyOutcome::ClearAndBlur {
                input.set_value("");
                dispatch.dispatch(UserAction::SetUrlTableConfig(
                    UrlTableConfigPatch::search_input(""),
                ));
            }
            if let Err(err) = input.blur() {
                console::error!("search field blur failed", err);
            }
            event.prevent_default();
        })
    };
    let toggle_mode = {
        let mode_open = mode_open.clone();
        Callback::from(move |_| mode_open.set(!*mode_open))
    };
    let toggle_panel = {
        let panel_open = panel_open.clone();
        Callback::from(move |_| panel_open.set(!*panel_open))
    };
    let on_select_mode = {
        let dispatch = dispatch.clone();
        let mode_open = mode_open.clone();
        let on_mode_change = props.on_mode_change.clone();
        Callback::from(move |mode: SearchMode| {
            dispatch.dispatch_all(mode_change_actions(mode));
            mode_open.set(false);
            on_mode_change.emit(mode);
        })
    };
    let close_mode = {
        let mode_open = mode_open.clone();
        Callback::from(move |()| mode_open.set(false))
    };
    let on_apply = {
        let dispatch = dispatch.clone();
        let panel_open = panel_open.clone();
        Callback::from(move |draft: FilterSortDraft| {
            dispatch.dispatch_all(refetch_with(draft.to_patch()));
            panel_open.set(false);
        })
    };
    let close_panel = {
        let panel_open = panel_open.clone();
        Callback::from(move |()| panel_open.set(false))
    };

    let icon_size = if narrow { "5" } else { "6" };
    let label = match mode_label(mode, narrow) {
        ModeLabel::Icon(SearchMode::Tag) => html! {
            <IconTag title={Some(AttrValue::from(SearchMode::Tag.label()))} size={Some(AttrValue::from("5"))} />
        },
        ModeLabel::Icon(SearchMode::Link) => html! {
            <IconLink title={Some(AttrValue::from(SearchMode::Link.label()))} size={Some(AttrValue::from("5"))} />
        },
        ModeLabel::Text(text) => html! { <span class="align-middle">{text}</span> },
    };

    html! {
        <div
            ref={root_ref}
            class={classes!("search-toolbar", narrow.then_some("search-toolbar--narrow"))}>
            <div class="search-toolbar__field input input-bordered">
                <button
                    type="button"
                    class="btn btn-ghost rounded-none h-full px-6"
                    aria-haspopup="listbox"
                    aria-expanded={(*mode_open).to_string()}
                    onclick={toggle_mode}>
                    {label}
                    <IconChevronDown
                        class={classes!("align-middle")}
                        size={Some(AttrValue::from(icon_size))} />
                </button>
                <span class="divider divider-horizontal mx-0"></span>
                {if narrow {
                    html! {}
                } else {
                    html! { <IconSearch class={classes!("ml-3", "mr-2")} size={Some(AttrValue::from("4"))} /> }
                }}
                <input
                    ref={input_ref}
                    class="grow"
                    type="search"
                    value={AttrValue::from(search_input)}
                    placeholder={mode.placeholder()}
                    aria-label={mode.placeholder()}
                    oninput={oninput}
                    onblur={onblur}
                    onkeydown={onkeydown}
                />
                <IconButton
                    aria_label="Filter and sort"
                    expanded={Some(*panel_open)}
                    onclick={toggle_panel}>
                    <IconSlidersHorizontal size={Some(AttrValue::from("5"))} />
                </IconButton>
            </div>
            <ModeMenu
                selected={mode}
                open={*mode_open}
                narrow={narrow}
                on_select={on_select_mode}
                on_close={close_mode} />
            <FilterSortPanel
                open={*panel_open}
                config={(*config).clone()}
                on_apply={on_apply}
                on_close={close_panel} />
            {if narrow && *panel_open {
                html! { <div class="search-toolbar__backdrop fixed inset-0 z-40" aria-hidden="true"></div> }
            } else {
                html! {}
            }}
        </div>
    }
}
