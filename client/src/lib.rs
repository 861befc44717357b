//! # client
//!
//! Leptos + WASM frontend for the player administration console.
//!
//! This crate contains the login and player-list pages, the player form
//! modal, session state, and the typed REST client for the remote player
//! service. The `server` crate renders it with SSR and the `hydrate`
//! build takes over in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
