//! Network adapters: catalog fetch and assistant transport.

pub mod api;
