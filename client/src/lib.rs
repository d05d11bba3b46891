//! # client
//!
//! Leptos + WASM frontend for the lab dashboard.
//!
//! This crate contains the router, the route guard that applies the
//! navigation gate from `access`, the dashboard layout, pages, and the
//! browser-side identity cache. The server renders it with the `ssr` feature;
//! the browser hydrates it with the `hydrate` feature.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
