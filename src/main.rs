//! Penrose AI Website
//!
//! Marketing site and dashboard shell for Penrose AI, built with Leptos (WASM).
//!
//! # Features
//!
//! - Landing page with animated product sections
//! - Email and delegated (OAuth) sign-in via the hosted identity provider
//! - Dashboard shell with the model playground
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The only network dependency is the external identity
//! provider; everything else runs in the browser.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
