//! CSV export of the appointment table

use crate::booking::{appointment_rows, Schedule, APPOINTMENT_HEADERS};
use std::io::Write;

/// Write the appointment table (same columns as the on-screen table)
pub fn write_appointments_csv<W: Write>(schedule: &Schedule, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(APPOINTMENT_HEADERS)?;

    for row in appointment_rows(schedule) {
        wtr.write_record([
            row.index.to_string(),
            row.email,
            row.name,
            row.time,
            row.doctor,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Appointment table as a CSV string
pub fn appointments_csv(schedule: &Schedule) -> Result<String, csv::Error> {
    let mut buf = Vec::new();
    write_appointments_csv(schedule, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{local_datetime, Appointment, Doctor};

    #[test]
    fn test_csv_export() {
        let schedule = Schedule::new(
            vec![Doctor::new("D1", "Grey, Meredith")],
            vec![
                Appointment::new("D1", "Alice", local_datetime::parse("2024-01-01T09:00").unwrap())
                    .email("alice@example.com"),
            ],
        );

        let csv = appointments_csv(&schedule).unwrap();

        assert_eq!(
            csv,
            "#,Email,Name,Appointment Time,Doctor Name\n\
             1,alice@example.com,Alice,2024-01-01T09:00,\"Grey, Meredith\"\n"
        );
    }

    #[test]
    fn test_empty_export_has_header() {
        let csv = appointments_csv(&Schedule::default()).unwrap();
        assert_eq!(csv, "#,Email,Name,Appointment Time,Doctor Name\n");
    }
}
