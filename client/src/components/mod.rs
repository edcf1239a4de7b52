//! UI components. Each reads the shared `ViewState` signal and routes
//! user actions to the controller stored in context.

pub mod category_filter;
pub mod chat_panel;
pub mod product_grid;
pub mod selected_panel;
