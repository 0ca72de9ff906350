//! Read-only table rows for the doctor and appointment listings

use crate::booking::schedule::Schedule;
use serde::Serialize;

/// Column headers of the appointment table, in display order
pub const APPOINTMENT_HEADERS: [&str; 5] = ["#", "Email", "Name", "Appointment Time", "Doctor Name"];

/// Column headers of the doctor table
pub const DOCTOR_HEADERS: [&str; 2] = ["Dr Id", "Dr Name"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorRow {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentRow {
    /// 1-based position in the collection
    pub index: usize,
    pub email: String,
    pub name: String,
    pub time: String,
    pub doctor: String,
}

pub fn doctor_rows(schedule: &Schedule) -> Vec<DoctorRow> {
    schedule
        .doctors()
        .iter()
        .map(|d| DoctorRow {
            id: d.id.clone(),
            name: d.title.clone(),
        })
        .collect()
}

pub fn appointment_rows(schedule: &Schedule) -> Vec<AppointmentRow> {
    schedule
        .appointments()
        .iter()
        .enumerate()
        .map(|(i, a)| AppointmentRow {
            index: i + 1,
            email: a.email.clone().unwrap_or_default(),
            name: a.title.clone(),
            time: a.start_display(),
            doctor: schedule.doctor_name(&a.resource_id).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::types::{local_datetime, Appointment, Doctor};

    #[test]
    fn test_appointment_rows() {
        let schedule = Schedule::new(
            vec![Doctor::new("D1", "Grey")],
            vec![
                Appointment::new("D1", "Alice", local_datetime::parse("2024-01-01T09:00").unwrap())
                    .email("alice@example.com"),
                Appointment::new("D9", "Bob", local_datetime::parse("2024-01-02T10:15").unwrap()),
            ],
        );

        let rows = appointment_rows(&schedule);

        assert_eq!(
            rows,
            vec![
                AppointmentRow {
                    index: 1,
                    email: "alice@example.com".to_string(),
                    name: "Alice".to_string(),
                    time: "2024-01-01T09:00".to_string(),
                    doctor: "Grey".to_string(),
                },
                AppointmentRow {
                    index: 2,
                    email: String::new(),
                    name: "Bob".to_string(),
                    time: "2024-01-02T10:15".to_string(),
                    doctor: "D9".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_doctor_rows_keep_order() {
        let schedule = Schedule::new(
            vec![Doctor::new("D2", "Zhang"), Doctor::new("D1", "Adams")],
            Vec::new(),
        );

        let ids: Vec<_> = doctor_rows(&schedule).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["D2", "D1"]);
    }
}
