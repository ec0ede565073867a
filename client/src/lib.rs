//! # client
//!
//! Leptos + WASM frontend for the SchoolHub school-management portal.
//!
//! This crate contains pages, components, client-side state, the REST client,
//! and the pure helpers (validation, pagination, chart geometry) the pages are
//! built on. The `server` crate renders `app::App` on the server and the
//! `hydrate` entry point below takes over in the browser.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
