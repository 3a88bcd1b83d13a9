use yew::prelude::*;

/// Props for icon-only buttons in the toolbar.
#[derive(Properties, PartialEq)]
pub(crate) struct IconButtonProps {
    /// Accessible label for the button.
    pub aria_label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Whether the controlled surface is open.
    #[prop_or_default]
    pub expanded: Option<bool>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(IconButton)]
pub(crate) fn icon_button(props: &IconButtonProps) -> Html {
    let classes = classes!("btn", "btn-ghost", "btn-square", props.class.clone());
    html! {
        <button
            class={classes}
            type="button"
            aria-label={props.aria_label.clone()}
            aria-expanded={props.expanded.map(|open| AttrValue::from(open.to_string()))}
            onclick={props.onclick.clone()}
        >
            {for props.children.iter()}
        </button>
    }
}
