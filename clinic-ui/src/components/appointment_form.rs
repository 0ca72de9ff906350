//! Appointment Form Component
//!
//! Books a patient with a doctor. Booking again for the same doctor
//! replaces the earlier appointment.

use clinic_calendar::booking::AppointmentForm as AppointmentFields;
use leptos::*;

use crate::state::BookingState;

#[component]
pub fn AppointmentForm() -> impl IntoView {
    let state = use_context::<BookingState>().expect("BookingState not found");
    let doctors = state.doctors;

    let (fields, set_fields) = create_signal(AppointmentFields::default());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let mut form = fields.get_untracked();
        let patient = form.name.trim().to_string();
        let doctor = form.doctor.trim().to_string();

        match state.submit_appointment(&mut form) {
            Ok(outcome) => {
                let message = if outcome.replaced.is_empty() {
                    format!("Booked {} with {}", patient, state.doctor_name(&doctor))
                } else {
                    format!(
                        "Rebooked {} with {} (previous appointment replaced)",
                        patient,
                        state.doctor_name(&doctor)
                    )
                };
                state.show_success(&message);
                set_fields.set(form);
            }
            Err(e) => state.show_error(&e.to_string()),
        }
    };

    view! {
        <h1>"Appointment Form"</h1>
        <form id="appointmentForm" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Email"</label>
                <input
                    type="text"
                    class="form-control"
                    id="email"
                    placeholder="Enter your Email"
                    required
                    prop:value=move || fields.with(|f| f.email.clone())
                    on:input=move |ev| set_fields.update(|f| f.email = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="name">"Your Name"</label>
                <input
                    type="text"
                    class="form-control"
                    id="name"
                    placeholder="Enter your name"
                    required
                    prop:value=move || fields.with(|f| f.name.clone())
                    on:input=move |ev| set_fields.update(|f| f.name = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="doctor">"Choose a Doctor"</label>
                <select
                    class="form-control"
                    id="doctor"
                    required
                    prop:value=move || fields.with(|f| f.doctor.clone())
                    on:change=move |ev| set_fields.update(|f| f.doctor = event_target_value(&ev))
                >
                    <option value="" disabled selected=move || fields.with(|f| f.doctor.is_empty())>
                        "Select a doctor"
                    </option>
                    <For
                        each=move || doctors.get()
                        key=|doctor| doctor.id.clone()
                        children=|doctor| view! {
                            <option value=doctor.id.clone()>{doctor.title.clone()}</option>
                        }
                    />
                </select>
            </div>
            <div class="form-group">
                <label for="appointmentTime">"Choose Appointment Time"</label>
                <input
                    type="datetime-local"
                    class="form-control"
                    id="appointmentTime"
                    required
                    prop:value=move || fields.with(|f| f.appointment_time.clone())
                    on:input=move |ev| {
                        set_fields.update(|f| f.appointment_time = event_target_value(&ev))
                    }
                />
            </div>
            <button type="submit" class="btn btn-success">"Book Appointment"</button>
        </form>
    }
}
