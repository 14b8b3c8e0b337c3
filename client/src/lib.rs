//! # client
//!
//! Leptos + WASM frontend for the research assistant.
//!
//! This crate contains the home page, its components, the session state
//! that drives them, and the REST helpers for the search and chat endpoints.
//! The `ssr` build is rendered by the `paperdesk` host; the `hydrate` build
//! runs in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
