//! Link table with pagination.

use crate::components::atoms::EmptyState;
use crate::core::store::AppStore;
use crate::features::links::actions::{LinkDispatch, refetch_with};
use crate::features::links::effects::StoreDispatch;
use crate::features::links::state::{
    UrlTableConfigPatch, is_loading, page_count, shows_empty_state,
};
use crate::services::api::ApiClient;
use shortlink_api_models::{UrlState, UrlSummary};
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct LinkTableProps {
    pub client: Rc<ApiClient>,
}

#[function_component(LinkTable)]
pub(crate) fn link_table(props: &LinkTableProps) -> Html {
    let urls = use_selector(|store: &AppStore| store.user.urls.clone());
    let count = use_selector(|store: &AppStore| store.user.url_count);
    let fetching = use_selector(|store: &AppStore| is_loading(&store.user));
    let empty = use_selector(|store: &AppStore| shows_empty_state(&store.user));
    let error = use_selector(|store: &AppStore| store.user.fetch_error.clone());
    let paging = use_selector(|store: &AppStore| {
        (
            store.user.table_config.page_number,
            store.user.table_config.rows_per_page,
        )
    });
    let dispatch = use_memo(|client| StoreDispatch::new(client.clone()), props.client.clone());

    let (page, rows) = *paging;
    let pages = page_count(*count, rows);
    let go_to = |target: u32| {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.dispatch_all(refetch_with(UrlTableConfigPatch::page(target)));
        })
    };
    let has_prev = page > 0;
    let has_next = u64::from(page) + 1 < pages;

    let body = if let Some(message) = (*error).clone() {
        html! { <div role="alert" class="alert alert-error">{message}</div> }
    } else if *empty {
        html! {
            <EmptyState
                title={AttrValue::from("No links found")}
                hint={Some(AttrValue::from("Try a different search or clear the filters."))} />
        }
    } else {
        html! {
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>{"Short link"}</th>
                        <th>{"Destination"}</th>
                        <th>{"Tags"}</th>
                        <th class="text-right">{"Clicks"}</th>
                        <th>{"Updated"}</th>
                    </tr>
                </thead>
                <tbody>{for urls.iter().map(render_row)}</tbody>
            </table>
        }
    };

    html! {
        <section class={classes!("link-table", fetching.then_some("opacity-60"))} aria-busy={fetching.to_string()}>
            {if *fetching {
                html! { <progress class="progress progress-primary w-full" /> }
            } else {
                html! {}
            }}
            {body}
            <nav class="flex items-center justify-between pt-3" aria-label="Pagination">
                <span class="text-sm opacity-70">
                    {format!("{} links", *count)}
                </span>
                <div class="join">
                    <button
                        type="button"
                        class="btn btn-sm join-item"
                        disabled={!has_prev}
                        onclick={go_to(page.saturating_sub(1))}>
                        {"Prev"}
                    </button>
                    <span class="btn btn-sm join-item btn-disabled">
                        {format!("{} / {}", page + 1, pages.max(1))}
                    </span>
                    <button
                        type="button"
                        class="btn btn-sm join-item"
                        disabled={!has_next}
                        onclick={go_to(page.saturating_add(1))}>
                        {"Next"}
                    </button>
                </div>
            </nav>
        </section>
    }
}

fn render_row(url: &UrlSummary) -> Html {
    let state_class = match url.state {
        UrlState::Active => "badge-success",
        UrlState::Inactive => "badge-ghost",
    };
    html! {
        <tr key={url.short_url.clone()}>
            <td>
                <span class="font-mono">{format!("/{}", url.short_url)}</span>
                <span class={classes!("badge", "badge-sm", "ml-2", state_class)}>
                    {url.state.as_str()}
                </span>
                {if url.is_file {
                    html! { <span class="badge badge-sm badge-outline ml-1">{"File"}</span> }
                } else {
                    html! {}
                }}
            </td>
            <td class="truncate max-w-xs" title={url.long_url.clone()}>{url.long_url.clone()}</td>
            <td>
                {for url.tags.iter().map(|tag| html! {
                    <span class="badge badge-sm badge-outline mr-1">{tag.clone()}</span>
                })}
            </td>
            <td class="text-right">{url.clicks.to_string()}</td>
            <td>{url.updated_at.format("%Y-%m-%d").to_string()}</td>
        </tr>
    }
}
