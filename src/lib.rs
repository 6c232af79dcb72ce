//! # folio
//!
//! Leptos + WASM client for a personal portfolio site: theme and language
//! switching, navbar menus, carousels, an autoplaying before/after
//! comparison slider, a radial skill showcase and a typewriter headline.
//!
//! `state` holds browser-free state machines, `util` the thin `web-sys`
//! layer, and `components` the Leptos views wiring the two together. Build
//! with the `csr` feature for the browser; without it the crate compiles
//! natively so the state layer can be tested with `cargo test`.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: install panic and log hooks, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
    log::info!("folio starting");
    leptos::mount::mount_to_body(app::App);
}
