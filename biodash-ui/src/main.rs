//! Biodash Dashboard
//!
//! Belly Button Biodiversity dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Sample selection dropdown driving four linked views
//! - Demographic metadata panel
//! - Top-10 OTU horizontal bar chart
//! - All-OTU bubble chart with the Earth colorscale
//! - Washing-frequency gauge
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It fetches the sample document once from the Biodash API at
//! startup and renders everything locally on HTML5 canvases.

use leptos::*;

mod api;
mod app;
mod components;
mod model;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
