//! UI Components
//!
//! Leptos components for the booking screen.

pub mod appointment_form;
pub mod calendar;
pub mod doctor_form;
pub mod tables;
pub mod toast;
pub mod view_switch;

pub use appointment_form::AppointmentForm;
pub use calendar::Calendar;
pub use doctor_form::DoctorForm;
pub use tables::{AppointmentTable, DoctorTable};
pub use toast::Toast;
pub use view_switch::ViewSwitch;
