//! Placeholder shown when the link table has no rows.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="links-empty" role="status">
            <h4>{props.title.clone()}</h4>
            {props.hint.clone().map(|text| html! {
                <p class="text-base-content/60">{text}</p>
            }).unwrap_or_default()}
        </div>
    }
}
