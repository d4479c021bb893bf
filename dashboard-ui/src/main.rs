//! Graduates Dashboard
//!
//! Browser frontend for the AlmaLaurea 2024 profile of Computer Science
//! graduates (class L-31), built with Leptos (WASM).
//!
//! # Architecture
//!
//! Client-side rendered. The view state, strings, figures and the page
//! model come from the `graduates-dashboard` crate; this crate binds them to
//! the browser history and draws the charts on canvas.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
