//! # routine-client
//!
//! Leptos + WASM front-end for the product picker and routine assistant.
//!
//! The core `routine-builder` crate owns all state; this crate supplies
//! the browser side: `localStorage` persistence, HTTP adapters for the
//! catalog and assistant proxy, and the components that draw each
//! `ViewState` frame.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    console_log::init_with_level(log::Level::Debug).ok();
    leptos::mount::mount_to_body(app::App);
}
