//! Read-only Tables
//!
//! Doctor and appointment listings, rendered straight from the state.

use clinic_calendar::booking::{
    appointment_rows, doctor_rows, Schedule, APPOINTMENT_HEADERS, DOCTOR_HEADERS,
};
use leptos::*;

use crate::state::BookingState;

#[component]
pub fn DoctorTable() -> impl IntoView {
    let state = use_context::<BookingState>().expect("BookingState not found");
    let doctors = state.doctors;

    let rows = move || {
        let schedule = Schedule::new(doctors.get(), Vec::new());
        doctor_rows(&schedule)
    };

    view! {
        <h1>"Dr Table"</h1>
        <table class="table table-dark" id="drdata">
            <thead>
                <tr>
                    {DOCTOR_HEADERS.iter().map(|h| view! { <th scope="col">{*h}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                <For
                    each=rows
                    key=|row| row.id.clone()
                    children=|row| view! {
                        <tr>
                            <td>{row.id}</td>
                            <td>{row.name}</td>
                        </tr>
                    }
                />
            </tbody>
        </table>
    }
}

#[component]
pub fn AppointmentTable() -> impl IntoView {
    let state = use_context::<BookingState>().expect("BookingState not found");
    let doctors = state.doctors;
    let appointments = state.appointments;

    let rows = move || {
        let schedule = Schedule::new(doctors.get(), appointments.get());
        appointment_rows(&schedule)
    };

    view! {
        <h1>"Table Appointment"</h1>
        <table class="table table-dark" id="user">
            <thead>
                <tr>
                    {APPOINTMENT_HEADERS.iter().map(|h| view! { <th scope="col">{*h}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {move || rows().into_iter().map(|row| view! {
                    <tr>
                        <td>{row.index}</td>
                        <td>{row.email}</td>
                        <td>{row.name}</td>
                        <td>{row.time}</td>
                        <td>{row.doctor}</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}
