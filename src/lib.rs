//! # scholar-shell
//!
//! WASM glue loaded by every server-rendered page of the writing assistant.
//! Applies the persisted light/dark theme, gates protected pages on the
//! identity provider's auth state, highlights the active navigation link,
//! and wires the logout control.
//!
//! Pure decision logic lives in `state` and `util` and is tested natively.
//! Everything that touches the browser is compiled only with the `hydrate`
//! feature and degrades to a no-op otherwise.

pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod app;

/// WASM start entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    app::boot();
}
