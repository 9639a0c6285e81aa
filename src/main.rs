//! Baseline Dashboard
//!
//! Sleep-tracking frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Nightly summaries, raw sleep records, and aggregate statistics
//! - HealthKit export upload
//! - LLM-generated sleep insights
//! - Token-based sessions persisted across reloads
//! - Scripted onboarding walkthrough
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that
//! compiles to WebAssembly. It talks to the sleep analysis backend
//! over HTTP; all aggregation happens server-side.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;
mod tour;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
