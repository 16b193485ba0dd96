//! # hotel-portal
//!
//! Leptos + WASM client routing for the hotel ordering portal. End users and
//! hotel accounts share one single-page app; a static route table maps paths
//! to pages and a navigation guard redirects visitors who lack a session or
//! hold the wrong role.
//!
//! The routing core (`routes`, `guard`, `navigation`, `config`,
//! `state::session`) is framework agnostic and runs natively under
//! `cargo test`. Browser access is gated behind the `csr` feature.

pub mod app;
pub mod config;
pub mod guard;
pub mod navigation;
pub mod pages;
pub mod routes;
pub mod state;

/// WASM entry point: installs the panic hook and console logger, then mounts
/// the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("console logger unavailable: {err}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
