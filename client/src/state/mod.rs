//! Client-side state glue.
//!
//! DESIGN
//! ======
//! All session state lives in the core `Controller`. This module only
//! bridges its render boundary into a Leptos signal (`view`) and maps
//! transcript entries to display fragments (`chat`).

pub mod chat;
pub mod view;
