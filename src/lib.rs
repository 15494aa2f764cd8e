//! # restaurants
//!
//! Leptos + WASM frontend for the pizza restaurants app.
//!
//! `app` holds the root component and route outlet, `routes` the route table
//! and matching, `pages` the route-level screens, `components` shared UI,
//! and `net` the REST client for the restaurants backend.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;

/// WASM entry point: hydrates the server-rendered `App` once.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("console logger not installed: {err}");
    }
    log::info!("hydrating restaurants client");
    leptos::mount::hydrate_body(app::App);
}
