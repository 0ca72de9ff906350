//! Doctors, appointments and the booking rules
//!
//! - **types**: `Doctor` and `Appointment` records
//! - **schedule**: the two collections and their invariants
//! - **forms**: raw form fields and required-field validation
//! - **service**: form handlers that mutate the schedule and persist it
//! - **table**: rows for the read-only listings
//! - **error**: Error types

pub mod error;
pub mod forms;
pub mod schedule;
pub mod service;
pub mod table;
pub mod types;

pub use error::{BookingError, BookingResult, FormError};
pub use forms::{AppointmentForm, DoctorForm};
pub use schedule::{BookingOutcome, DoctorOutcome, Schedule};
pub use service::BookingService;
pub use table::{
    appointment_rows, doctor_rows, AppointmentRow, DoctorRow, APPOINTMENT_HEADERS, DOCTOR_HEADERS,
};
pub use types::{local_datetime, Appointment, Doctor};
