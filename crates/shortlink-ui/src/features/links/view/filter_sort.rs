//! Filter and sort panel.
//!
//! # Design
//! - Edits a local draft; nothing reaches the store until apply.
//! - The draft is reseeded from the stored config whenever the panel opens.

use crate::features::links::logic::{
    SORT_OPTIONS, STATE_OPTIONS, TYPE_OPTIONS, direction_label, flip_direction,
};
use crate::features::links::state::{FilterSortDraft, UrlTableConfig};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct FilterSortPanelProps {
    pub open: bool,
    pub config: UrlTableConfig,
    pub on_apply: Callback<FilterSortDraft>,
    pub on_close: Callback<()>,
}

#[function_component(FilterSortPanel)]
pub(crate) fn filter_sort_panel(props: &FilterSortPanelProps) -> Html {
    let draft = use_state(|| FilterSortDraft::from_config(&props.config));
    {
        let draft = draft.clone();
        let config = props.config.clone();
        use_effect_with_deps(
            move |open: &bool| {
                if *open {
                    draft.set(FilterSortDraft::from_config(&config));
                }
                || ()
            },
            props.open,
        );
    }
    if !props.open {
        return html! {};
    }
    let current = *draft;

    let sort_items = SORT_OPTIONS.into_iter().map(|(order_by, label)| {
        let draft = draft.clone();
        let active = current.order_by == order_by;
        let onclick = Callback::from(move |_| {
            draft.set(FilterSortDraft {
                order_by,
                ..*draft
            });
        });
        html! {
            <button
                type="button"
                class={classes!("btn", "btn-sm", if active { "btn-primary" } else { "btn-ghost" })}
                aria-pressed={active.to_string()}
                onclick={onclick}>
                {label}
            </button>
        }
    });
    let direction_toggle = {
        let draft = draft.clone();
        Callback::from(move |_| {
            draft.set(FilterSortDraft {
                sort_direction: flip_direction(draft.sort_direction),
                ..*draft
            });
        })
    };
    let state_items = STATE_OPTIONS.into_iter().map(|(state, label)| {
        let draft = draft.clone();
        let checked = current.state == Some(state);
        let onchange = Callback::from(move |_: Event| draft.set(draft.toggle_state(state)));
        html! {
            <label class="label cursor-pointer justify-start gap-2">
                <input type="checkbox" class="checkbox checkbox-sm" checked={checked} onchange={onchange} />
                <span class="label-text">{label}</span>
            </label>
        }
    });
    let type_items = TYPE_OPTIONS.into_iter().map(|(is_file, label)| {
        let draft = draft.clone();
        let checked = current.is_file == Some(is_file);
        let onchange = Callback::from(move |_: Event| draft.set(draft.toggle_is_file(is_file)));
        html! {
            <label class="label cursor-pointer justify-start gap-2">
                <input type="checkbox" class="checkbox checkbox-sm" checked={checked} onchange={onchange} />
                <span class="label-text">{label}</span>
            </label>
        }
    });
    let on_reset = {
        let draft = draft.clone();
        Callback::from(move |_| draft.set(FilterSortDraft::default()))
    };
    let on_apply = {
        let on_apply = props.on_apply.clone();
        Callback::from(move |_| on_apply.emit(current))
    };
    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="filter-sort-panel absolute right-0 z-50 mt-1 w-80 bg-base-100 rounded-box shadow p-4 space-y-3">
            <section>
                <h3 class="text-sm font-semibold mb-1">{"Sort by"}</h3>
                <div class="flex flex-wrap gap-1">{for sort_items}</div>
                <button type="button" class="btn btn-xs btn-ghost mt-1" onclick={direction_toggle}>
                    {direction_label(current.sort_direction)}
                </button>
            </section>
            <section>
                <h3 class="text-sm font-semibold mb-1">{"State"}</h3>
                {for state_items}
            </section>
            <section>
                <h3 class="text-sm font-semibold mb-1">{"Type"}</h3>
                {for type_items}
            </section>
            <div class="flex justify-between pt-2">
                <button type="button" class="btn btn-sm btn-ghost" onclick={on_reset}>{"Reset"}</button>
                <div class="flex gap-2">
                    <button type="button" class="btn btn-sm" onclick={on_cancel}>{"Cancel"}</button>
                    <button type="button" class="btn btn-sm btn-primary" onclick={on_apply}>{"Apply"}</button>
                </div>
            </div>
        </div>
    }
}
