//! # client
//!
//! Leptos (SSR + hydrate) frontend for the XOps360 marketing site.
//!
//! Pages and components wire the pure state machines from `motion` to DOM
//! events, and the admin screens drive the shared `records` types through
//! the server's JSON API. Browser-only behavior is gated behind the
//! `hydrate` feature; SSR builds render the initial markup and no-op.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
