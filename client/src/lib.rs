//! # client
//!
//! Leptos + WASM frontend for Scribl collaborative greeting cards.
//!
//! This crate contains pages, components, client state and the REST client
//! for the card API. It hosts the `canvas` crate's editor engine through the
//! `EditorHost` bridge component.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
