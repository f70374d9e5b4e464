//! Study Planner - study session planning web application
//!
//! Login/signup forms and a session-gated navigation bar, built with
//! Leptos and WebAssembly. Authentication is delegated to an external
//! provider; this app only drives the forms and observes the session.

#![recursion_limit = "512"]

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
