//! Product card grid for the active category.

use leptos::prelude::*;
use routine_builder::{ProductCard, ViewState};

use crate::app::AppController;

#[component]
pub fn ProductGrid() -> impl IntoView {
    let view = expect_context::<RwSignal<ViewState>>();
    let controller = expect_context::<AppController>();

    view! {
        <div id="productsContainer" class="products-grid">
            {move || {
                let (placeholder, cards) = view.with(|v| (v.grid_placeholder, v.cards.clone()));
                if let Some(text) = placeholder {
                    return view! { <div class="placeholder-message">{text}</div> }.into_any();
                }
                cards
                    .into_iter()
                    .map(|card| view! { <ProductCardView card=card controller=controller/> })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn ProductCardView(card: ProductCard, controller: AppController) -> impl IntoView {
    let ProductCard { product, selected } = card;
    let id = product.id;
    let class = if selected { "product-card selected" } else { "product-card" };

    view! {
        <div class=class data-id=id.to_string() on:click=move |_| controller.update_value(|c| c.click_product(id))>
            <img src=product.image.clone() alt=product.name.clone()/>
            <div class="product-info">
                <h3>{product.name.clone()}</h3>
                <p>{product.brand.clone()}</p>
                <div class="product-description">{product.description.clone()}</div>
            </div>
        </div>
    }
}
