//! Root application component and context providers.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use routine_builder::{AppConfig, CatalogSource, Controller, SelectionStore, ViewState};

use crate::components::{
    category_filter::CategoryFilter, chat_panel::ChatPanel, product_grid::ProductGrid,
    selected_panel::SelectedPanel,
};
use crate::net::api::{BrowserTransport, HttpCatalog};
use crate::state::view::SignalRenderer;
use crate::util::storage::BrowserStorage;

/// The page's single controller, shared through context.
pub type AppController = StoredValue<Controller<BrowserStorage, SignalRenderer>, LocalStorage>;

/// Root application component.
///
/// Builds the controller over `localStorage`, provides it with the view
/// signal and network adapters, then loads the catalog once so the
/// category list is populated.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::default();
    let view = RwSignal::new(ViewState::default());
    let store = SelectionStore::with_key(BrowserStorage, config.storage_key.clone());
    let controller: AppController = StoredValue::new_local(Controller::new(store, SignalRenderer::new(view)));
    let catalog = HttpCatalog::new(&config);

    provide_context(view);
    provide_context(controller);
    provide_context(catalog.clone());
    provide_context(BrowserTransport::new(&config));

    // Populate categories without choosing one. Superseded if the user
    // picks a category first.
    if let Some(request) = controller.try_update_value(|c| c.begin_category("")) {
        spawn_local(async move {
            let result = catalog.load().await;
            controller.update_value(|c| c.finish_category(request, result));
        });
    }

    view! {
        <Stylesheet id="app" href="/style.css"/>
        <Title text="L'Or\u{e9}al | Smart Routine & Product Advisor"/>

        <div class="page-wrapper">
            <header class="site-header">
                <h1 class="site-title">"Smart Routine & Product Advisor"</h1>
            </header>
            <CategoryFilter/>
            <ProductGrid/>
            <SelectedPanel/>
            <ChatPanel/>
        </div>
    }
}
