//! # client
//!
//! Leptos + WASM frontend for the Slaczz sign-in screen.
//!
//! The crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`). It starts OAuth and magic-link sign-ins against an external
//! identity provider and reflects in-flight state; sessions are finalized by
//! the provider's callback route, not here.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
