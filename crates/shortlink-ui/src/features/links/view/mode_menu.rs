//! Search mode selector.
//!
//! # Design
//! - Dropdown list on wide viewports, bottom drawer on narrow ones.
//! - Stateless; the toolbar owns the open flag.

use crate::features::links::logic::SearchMode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModeMenuProps {
    pub selected: SearchMode,
    pub open: bool,
    #[prop_or_default]
    pub narrow: bool,
    pub on_select: Callback<SearchMode>,
    pub on_close: Callback<()>,
}

#[function_component(ModeMenu)]
pub(crate) fn mode_menu(props: &ModeMenuProps) -> Html {
    if !props.open {
        return html! {};
    }
    let items = SearchMode::all().into_iter().map(|mode| {
        let on_select = props.on_select.clone();
        let active = mode == props.selected;
        html! {
            <li role="option" aria-selected={active.to_string()}>
                <button
                    type="button"
                    class={classes!("justify-start", active.then_some("active"))}
                    onclick={Callback::from(move |_| on_select.emit(mode))}>
                    {mode.label()}
                </button>
            </li>
        }
    });

    if props.narrow {
        let on_close = props.on_close.clone();
        html! {
            <div class="mode-drawer fixed inset-x-0 bottom-0 z-50 bg-base-100 rounded-t-box shadow-lg p-2">
                <div class="flex items-center justify-between px-2 pb-1">
                    <span class="text-sm font-semibold">{"Search by"}</span>
                    <button
                        type="button"
                        class="btn btn-ghost btn-xs"
                        onclick={Callback::from(move |_| on_close.emit(()))}>
                        {"Close"}
                    </button>
                </div>
                <ul role="listbox" class="menu w-full">{for items}</ul>
            </div>
        }
    } else {
        html! {
            <ul
                role="listbox"
                class="mode-menu menu absolute z-50 mt-1 bg-base-100 rounded-box w-40 p-1 shadow">
                {for items}
            </ul>
        }
    }
}
