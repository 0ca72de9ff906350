//! Doctor Form Component
//!
//! Registers a doctor. A known id is ignored; the form clears either way.

use clinic_calendar::booking::{DoctorForm as DoctorFields, DoctorOutcome};
use leptos::*;

use crate::state::BookingState;

#[component]
pub fn DoctorForm() -> impl IntoView {
    let state = use_context::<BookingState>().expect("BookingState not found");

    let (fields, set_fields) = create_signal(DoctorFields::default());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let mut form = fields.get_untracked();
        let id = form.dr_id.trim().to_string();

        match state.submit_doctor(&mut form) {
            Ok(DoctorOutcome::Added) => state.show_success(&format!("Added doctor {}", id)),
            Ok(DoctorOutcome::AlreadyKnown) => {
                web_sys::console::log_1(&format!("Doctor {} already exists", id).into());
            }
            Err(e) => {
                state.show_error(&e.to_string());
                return;
            }
        }

        set_fields.set(form);
    };

    view! {
        <form id="drform" on:submit=on_submit>
            <h1>"Doctor form"</h1>
            <div class="form-group">
                <label for="drId">"Dr Id"</label>
                <input
                    type="text"
                    class="form-control"
                    id="drId"
                    placeholder="Enter Dr ID"
                    required
                    prop:value=move || fields.with(|f| f.dr_id.clone())
                    on:input=move |ev| set_fields.update(|f| f.dr_id = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="drName">"Dr Name"</label>
                <input
                    type="text"
                    class="form-control"
                    id="drName"
                    placeholder="Enter Dr Name"
                    required
                    prop:value=move || fields.with(|f| f.dr_name.clone())
                    on:input=move |ev| set_fields.update(|f| f.dr_name = event_target_value(&ev))
                />
            </div>
            <button type="submit" class="btn btn-success">"Submit"</button>
        </form>
    }
}
