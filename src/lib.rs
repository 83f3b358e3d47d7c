//! Pinky - AI agent landing site
//!
//! A scroll-animated marketing page for the Pinky AI agent offer,
//! server-rendered with Leptos and hydrated in the browser.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
