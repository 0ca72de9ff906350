//! App Root Component
//!
//! Single booking screen: calendar on top, then the doctor and appointment
//! forms with their tables.

use leptos::*;

use crate::components::{
    AppointmentForm, AppointmentTable, Calendar, DoctorForm, DoctorTable, Toast, ViewSwitch,
};
use crate::state::provide_booking_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_booking_state();

    view! {
        <div class="container py-4">
            <ViewSwitch />
            <Calendar />

            <div class="row">
                <div class="col-md-6">
                    <DoctorForm />
                </div>
                <div class="col-md-6">
                    <DoctorTable />
                </div>
            </div>

            <div class="row mt-4">
                <div class="col-md-6">
                    <AppointmentForm />
                </div>
                <div class="col-md-6">
                    <AppointmentTable />
                </div>
            </div>

            <Toast />
        </div>
    }
}
