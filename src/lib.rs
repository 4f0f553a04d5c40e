//! # campus-connect
//!
//! Leptos + WASM frontend for the CampusConnect campus networking site.
//! Replaces the static-HTML + hand-written JavaScript pages with a
//! Rust-native client-side-rendered UI layer.
//!
//! This crate contains pages (sign-in, sign-up, home feed), components,
//! application state, the declarative element builder used for dynamically
//! composed feed fragments, and the simulated auth / link-preview
//! collaborators in `net`.

pub mod app;
pub mod components;
pub mod feed;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point. Mounts the application into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
