//! # portfolio-client
//!
//! Leptos + WASM frontend for a single-page personal portfolio.
//!
//! This crate contains the static portfolio content, the theme controller
//! and section navigator with their browser/headless capability adapters,
//! and the page components. The `hydrate` build runs in the browser; the
//! `ssr` build is rendered by the `portfolio` host binary.

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
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating portfolio");
    leptos::mount::hydrate_body(app::App);
}
