//! Core data types for clinic bookings
//!
//! - `Doctor`: a calendar resource (one lane in the day view)
//! - `Appointment`: a booked patient slot, rendered as an event on a
//!   doctor's lane
//!
//! Both serialise to the JSON shapes stored under the `"doctors"` and
//! `"events"` keys.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A doctor, shown as a calendar resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    /// User-supplied identifier, unique within the collection
    pub id: String,
    /// Display name
    pub title: String,
}

impl Doctor {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// Doctor synthesised when an appointment names an unknown id
    pub fn placeholder(id: impl Into<String>) -> Self {
        let id = id.into();
        let title = format!("Dr. {}", id);
        Self { id, title }
    }
}

/// A booked appointment
///
/// `id` equals the doctor id: a doctor holds at most one appointment at a
/// time, so the doctor id doubles as the appointment identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    /// Patient name
    pub title: String,
    #[serde(with = "local_datetime")]
    pub start: NaiveDateTime,
    #[serde(with = "local_datetime")]
    pub end: NaiveDateTime,
    /// Doctor id
    pub resource_id: String,
    /// Patient email, if collected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Appointment {
    /// Create a zero-length appointment for `doctor_id` at `at`
    pub fn new(doctor_id: impl Into<String>, patient: impl Into<String>, at: NaiveDateTime) -> Self {
        let doctor_id = doctor_id.into();
        Self {
            id: doctor_id.clone(),
            title: patient.into(),
            start: at,
            end: at,
            resource_id: doctor_id,
            email: None,
        }
    }

    /// Builder method: attach the patient's email
    pub fn email(mut self, email: impl Into<String>) -> Self {
        let email = email.into();
        self.email = if email.is_empty() { None } else { Some(email) };
        self
    }

    /// Start time in `datetime-local` form
    pub fn start_display(&self) -> String {
        local_datetime::format(&self.start)
    }
}

/// `datetime-local` (de)serialisation: `YYYY-MM-DDTHH:MM`, with seconds and
/// fractional seconds only when non-zero.
pub mod local_datetime {
    use chrono::{NaiveDateTime, Timelike};
    use serde::{Deserialize, Deserializer, Serializer};

    const MINUTES: &str = "%Y-%m-%dT%H:%M";
    const SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
    const FRACTIONAL: &str = "%Y-%m-%dT%H:%M:%S%.f";

    /// Parse a `datetime-local` value. Accepts an optional `:SS` (and
    /// fractional seconds) suffix.
    pub fn parse(s: &str) -> Option<NaiveDateTime> {
        let s = s.trim();
        NaiveDateTime::parse_from_str(s, MINUTES)
            .or_else(|_| NaiveDateTime::parse_from_str(s, SECONDS))
            .or_else(|_| NaiveDateTime::parse_from_str(s, FRACTIONAL))
            .ok()
    }

    pub fn format(dt: &NaiveDateTime) -> String {
        if dt.nanosecond() != 0 {
            dt.format(FRACTIONAL).to_string()
        } else if dt.second() != 0 {
            dt.format(SECONDS).to_string()
        } else {
            dt.format(MINUTES).to_string()
        }
    }

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse(&s).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid datetime-local value: {:?}", s))
        })
    }
}
