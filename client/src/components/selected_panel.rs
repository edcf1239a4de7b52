//! Selected-products list with remove, clear and generate-routine actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use routine_builder::{AssistantTransport, ViewState};

use crate::app::AppController;
use crate::net::api::BrowserTransport;

#[component]
pub fn SelectedPanel() -> impl IntoView {
    let view = expect_context::<RwSignal<ViewState>>();
    let controller = expect_context::<AppController>();
    let transport = expect_context::<BrowserTransport>();

    let on_generate = move |_| {
        let Some(pending) = controller.try_update_value(|c| c.begin_routine()).flatten() else {
            return;
        };
        let transport = transport.clone();
        spawn_local(async move {
            let reply = transport.send_conversation(pending.request()).await;
            controller.update_value(|c| c.complete_turn(pending, reply));
        });
    };

    let on_clear = move |_| controller.update_value(|c| c.clear_selection());

    view! {
        <div class="selected-products">
            <h2>"Selected Products"</h2>
            <div id="selectedProductsList">
                {move || {
                    let (placeholder, selected) = view.with(|v| (v.selected_placeholder, v.selected.clone()));
                    if let Some(text) = placeholder {
                        return view! { <div class="placeholder-message">{text}</div> }.into_any();
                    }
                    selected
                        .into_iter()
                        .map(|product| {
                            let id = product.id;
                            view! {
                                <div class="selected-item" data-id=id.to_string()>
                                    <span>{product.name}</span>
                                    <button
                                        class="remove-selected"
                                        title="Remove"
                                        on:click=move |_| controller.update_value(|c| c.remove_selected(id))
                                    >
                                        "\u{00d7}"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
            <Show when=move || view.with(|v| v.show_clear)>
                <button id="clearSelectedBtn" class="clear-selected-btn" on:click=on_clear>
                    "Clear All"
                </button>
            </Show>
            <button
                id="generateRoutine"
                class="generate-btn"
                on:click=on_generate
                disabled=move || view.with(|v| v.busy)
            >
                "Generate Routine"
            </button>
        </div>
    }
}
