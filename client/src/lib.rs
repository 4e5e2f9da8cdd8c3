//! # client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! The page is static content rendered from `content`, plus one piece of
//! state: the light/dark theme, restored from and persisted to
//! `localStorage` by `util::theme_controller`.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed; keep that one.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
