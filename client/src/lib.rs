//! # client
//!
//! Leptos + WASM frontend for the folio portfolio site.
//!
//! The page is rendered on the server with the theme already resolved, then
//! hydrated in the browser. Decision logic (theme precedence, affiliation
//! grid placement) lives in the `folio` crate; this crate maps it to markup
//! and wires the browser's storage and media queries into it.
#![recursion_limit = "256"]

pub mod app;
pub mod components;
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
