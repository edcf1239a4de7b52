//! Chat window: transcript plus the message form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use routine_builder::{AssistantTransport, ViewState};

use crate::app::AppController;
use crate::net::api::BrowserTransport;
use crate::state::chat::entry_display;

#[component]
pub fn ChatPanel() -> impl IntoView {
    let view = expect_context::<RwSignal<ViewState>>();
    let controller = expect_context::<AppController>();
    let transport = expect_context::<BrowserTransport>();

    let input = RwSignal::new(String::new());
    let window_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = view.with(|v| v.transcript.len());

        #[cfg(feature = "csr")]
        {
            if let Some(el) = window_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = input.get_untracked();
        let Some(pending) = controller.try_update_value(|c| c.begin_chat(&text)).flatten() else {
            return;
        };
        input.set(String::new());
        let transport = transport.clone();
        spawn_local(async move {
            let reply = transport.send_conversation(pending.request()).await;
            controller.update_value(|c| c.complete_turn(pending, reply));
        });
    };

    view! {
        <section class="chatbox">
            <h2>"Let's Build Your Routine"</h2>
            <div id="chatWindow" class="chat-window" node_ref=window_ref>
                {move || {
                    view.with(|v| v.transcript.iter().map(entry_display).collect::<Vec<_>>())
                        .into_iter()
                        .map(|line| {
                            view! {
                                <div class=line.class>
                                    {line.label.map(|label| view! { <strong>{label}</strong>" " })}
                                    {line.text}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <form id="chatForm" class="chat-form" on:submit=on_submit>
                <input
                    id="userInput"
                    type="text"
                    placeholder="Ask me about products or routines\u{2026}"
                    autocomplete="off"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button id="sendBtn" type="submit" disabled=move || view.with(|v| v.busy)>
                    "Send"
                </button>
            </form>
        </section>
    }
}
