//! Activities Signup Page
//!
//! Browser front-end for the activities API built with Leptos (WASM).
//!
//! # Features
//!
//! - Activity cards with live participant rosters
//! - Signup form with activity select
//! - One-click unregister per participant
//! - Auto-dismissing status messages
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The activity board lives in a signal and every card is a
//! projection of it; the interaction rules come from the `activities` crate.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
