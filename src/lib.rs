//! # atlas-web
//!
//! Leptos + WASM frontend for Atlas, a role-based portal where professors
//! request academic projects and administrators review and track them
//! through a fixed lifecycle.
//!
//! This crate contains pages, components, the session/auth layer, domain
//! state helpers, and the typed REST client for the Atlas backend. Browser
//! integration (storage, HTTP, navigation) is gated behind the `csr`
//! feature so the logic compiles and tests on the native target.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// Browser entry point. Initializes logging and mounts the application.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
