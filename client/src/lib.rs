//! # client
//!
//! Leptos frontend for the CYBER_NET community platform: forum, project
//! hub, learning resources, messenger popup and the admin back-office.
//!
//! Pages render in-memory mock data through the stores in `state`. The only
//! persisted values are the signed-in user and the theme preference, both
//! kept in browser local storage.

pub mod app;
pub mod components;
pub mod mock;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
