//! # webui
//!
//! Leptos + WASM single-page client for the photo-sharing service.
//!
//! The crate wires the application together: bootstrap and component
//! registration, the route table, and the navigation guard that keeps
//! signed-out visitors on the login page and signed-in ones off it. Session
//! state is a single opaque token in `localStorage`.

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;

/// WASM entry point: logging, panic hook, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already installed: {e}").into());
    }
    if let Err(e) = bootstrap::mount(config::AppConfig::load()) {
        log::error!("bootstrap failed: {e}");
    }
}
