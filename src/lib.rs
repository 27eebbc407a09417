//! # blog-auth
//!
//! Leptos + WASM sign-in and sign-up views for the blog frontend.
//!
//! Form behavior (fields, validation, submit state machine, banner timing)
//! comes from the framework-free `forms` crate. This crate supplies the
//! browser adapters for its ports (HTTP, `localStorage`, timers, router), the
//! shared views, and the routes `/`, `/signin` and `/signup`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic + console logging, then mount `App`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = app::resolve_config();
    if let Err(err) = console_log::init_with_level(config.log_level) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    leptos::logging::log!("blog-auth mounting against {}", config.api_base_url);
    leptos::mount::mount_to_body(app::App);
}
