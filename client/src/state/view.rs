//! Renderer that publishes each frame into a reactive signal.

use leptos::prelude::*;
use routine_builder::{Renderer, ViewState};

/// Sets the shared `RwSignal<ViewState>` on every controller render.
#[derive(Clone, Copy)]
pub struct SignalRenderer {
    view: RwSignal<ViewState>,
}

impl SignalRenderer {
    pub fn new(view: RwSignal<ViewState>) -> Self {
        Self { view }
    }

    pub fn signal(&self) -> RwSignal<ViewState> {
        self.view
    }
}

impl Renderer for SignalRenderer {
    fn render(&mut self, view: &ViewState) {
        self.view.set(view.clone());
    }
}
