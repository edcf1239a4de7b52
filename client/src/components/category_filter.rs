//! Category dropdown. Every change refetches the catalog; a slower
//! response for an earlier choice is dropped.

use leptos::prelude::*;
use leptos::task::spawn_local;
use routine_builder::{CatalogSource, ViewState};

use crate::app::AppController;
use crate::net::api::HttpCatalog;

#[component]
pub fn CategoryFilter() -> impl IntoView {
    let view = expect_context::<RwSignal<ViewState>>();
    let controller = expect_context::<AppController>();
    let catalog = expect_context::<HttpCatalog>();

    let on_change = move |ev: leptos::ev::Event| {
        let category = event_target_value(&ev);
        let Some(request) = controller.try_update_value(|c| c.begin_category(&category)) else {
            return;
        };
        let catalog = catalog.clone();
        spawn_local(async move {
            let result = catalog.load().await;
            controller.update_value(|c| c.finish_category(request, result));
        });
    };

    let current = move || view.with(|v| v.category.clone().unwrap_or_default());

    view! {
        <div class="search-section">
            <select id="categoryFilter" class="category-filter" on:change=on_change prop:value=current>
                <option value="" disabled=true>"Choose a Category"</option>
                {move || {
                    view.with(|v| v.categories.clone())
                        .into_iter()
                        .map(|category| {
                            let label = category.clone();
                            view! { <option value=category>{label}</option> }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
        </div>
    }
}
