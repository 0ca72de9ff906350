//! Toast Notification Component
//!
//! Shows success and error messages.

use leptos::*;

use crate::state::BookingState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<BookingState>().expect("BookingState not found");
    let success = state.success;
    let error = state.error;

    view! {
        <div style="position: fixed; bottom: 1rem; right: 1rem; z-index: 1050;">
            {move || {
                success.get().map(|msg| view! {
                    <ToastMessage message=msg variant=ToastVariant::Success />
                })
            }}

            {move || {
                error.get().map(|msg| view! {
                    <ToastMessage message=msg variant=ToastVariant::Error />
                })
            }}
        </div>
    }
}

#[derive(Clone, Copy)]
enum ToastVariant {
    Success,
    Error,
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    variant: ToastVariant,
) -> impl IntoView {
    let (icon, class) = match variant {
        ToastVariant::Success => ("✓", "alert alert-success shadow"),
        ToastVariant::Error => ("✕", "alert alert-danger shadow"),
    };

    view! {
        <div class=class role="alert">
            <strong class="mr-2">{icon}</strong>
            <span>{message}</span>
        </div>
    }
}
