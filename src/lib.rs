//! # wesourceyou
//!
//! Leptos + WASM client for the WeSourceYou media marketplace.
//!
//! The session store, route guards and HTTP client are plain Rust and run
//! natively under `cargo test`. Everything that touches the browser sits
//! behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod storage;
pub mod util;

#[cfg(test)]
mod test_support;

/// Browser entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
