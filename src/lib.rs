//! GLZ - Interactive 3D landing page
//!
//! A server-rendered, hydrated single-page site with an animated hero sculpture,
//! marketing sections and a client-side auth modal, built with Leptos and
//! WebAssembly.

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
