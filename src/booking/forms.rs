//! Form models
//!
//! Raw field values as typed by the user, plus the required-field checks a
//! browser would run before the submit handler.

use crate::booking::error::FormError;
use crate::booking::types::{local_datetime, Appointment, Doctor};

/// Appointment booking form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentForm {
    pub email: String,
    pub name: String,
    /// Selected doctor id
    pub doctor: String,
    /// `datetime-local` value
    pub appointment_time: String,
}

impl AppointmentForm {
    /// Validate the fields and build the appointment they describe
    pub fn to_appointment(&self) -> Result<Appointment, FormError> {
        let name = required(&self.name, "name")?;
        let doctor = required(&self.doctor, "doctor")?;
        let time = required(&self.appointment_time, "appointmentTime")?;

        let at = local_datetime::parse(time).ok_or_else(|| FormError::InvalidTime(time.to_string()))?;

        Ok(Appointment::new(doctor, name, at).email(self.email.trim()))
    }

    /// Clear every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Doctor registration form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorForm {
    pub dr_id: String,
    pub dr_name: String,
}

impl DoctorForm {
    pub fn to_doctor(&self) -> Result<Doctor, FormError> {
        let id = required(&self.dr_id, "drId")?;
        let name = required(&self.dr_name, "drName")?;
        Ok(Doctor::new(id, name))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, FormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(value)
    }
}
