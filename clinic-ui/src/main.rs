//! Clinic Calendar booking screen
//!
//! Client-side rendered Leptos application. Doctors and appointments live
//! in the browser's local storage under the `doctors` and `events` keys; the
//! calendar follows every change.

use leptos::*;

mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
