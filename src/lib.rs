//! # instafront
//!
//! Leptos + WASM single-page photo feed. Posts, likes, comments, and the
//! theme preference live in the browser's `localStorage`; there is no server.
//!
//! The crate holds the post model and feed store (`state`), browser glue
//! (`util`), and the UI (`components`, `app`). Browser-only code is gated
//! behind the `csr` feature so the domain logic builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod state;
pub mod util;

/// Install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("logger already installed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
