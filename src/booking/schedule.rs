//! In-memory booking state
//!
//! Holds the two ordered collections and enforces the booking rules:
//! doctor ids are unique, and each doctor has at most one appointment
//! (a new booking replaces the old one and moves to the end).

use crate::booking::types::{Appointment, Doctor};

/// Result of adding a doctor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoctorOutcome {
    Added,
    /// The id was already present; the collection is unchanged
    AlreadyKnown,
}

/// Result of booking an appointment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingOutcome {
    /// Appointments removed because they belonged to the same doctor
    pub replaced: Vec<Appointment>,
    /// Doctor created because the booking named an unknown id
    pub created_doctor: Option<Doctor>,
}

/// Doctors and appointments, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    doctors: Vec<Doctor>,
    appointments: Vec<Appointment>,
}

impl Schedule {
    pub fn new(doctors: Vec<Doctor>, appointments: Vec<Appointment>) -> Self {
        Self {
            doctors,
            appointments,
        }
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn has_doctor(&self, id: &str) -> bool {
        self.doctors.iter().any(|d| d.id == id)
    }

    pub fn doctor(&self, id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    /// Display name for a resource id, falling back to the id itself
    pub fn doctor_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.doctor(id).map(|d| d.title.as_str()).unwrap_or(id)
    }

    /// The current appointment held by a doctor
    pub fn appointment_for(&self, doctor_id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.resource_id == doctor_id)
    }

    /// Append a doctor unless the id is already taken
    pub fn add_doctor(&mut self, doctor: Doctor) -> DoctorOutcome {
        if self.has_doctor(&doctor.id) {
            return DoctorOutcome::AlreadyKnown;
        }
        self.doctors.push(doctor);
        DoctorOutcome::Added
    }

    /// Book an appointment, replacing whatever the doctor held before.
    /// Unknown doctor ids get a placeholder doctor titled `Dr. {id}`.
    pub fn book(&mut self, appointment: Appointment) -> BookingOutcome {
        let doctor_id = appointment.resource_id.clone();

        let (replaced, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.appointments)
            .into_iter()
            .partition(|a| a.resource_id == doctor_id);
        self.appointments = kept;
        self.appointments.push(appointment);

        let created_doctor = if self.has_doctor(&doctor_id) {
            None
        } else {
            let doctor = Doctor::placeholder(doctor_id);
            self.doctors.push(doctor.clone());
            Some(doctor)
        };

        BookingOutcome {
            replaced,
            created_doctor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::types::local_datetime;

    fn appt(doctor: &str, patient: &str, time: &str) -> Appointment {
        Appointment::new(doctor, patient, local_datetime::parse(time).unwrap())
    }

    #[test]
    fn test_duplicate_doctor_ignored() {
        let mut schedule = Schedule::default();

        assert_eq!(schedule.add_doctor(Doctor::new("D1", "Grey")), DoctorOutcome::Added);
        assert_eq!(
            schedule.add_doctor(Doctor::new("D1", "Someone Else")),
            DoctorOutcome::AlreadyKnown
        );

        assert_eq!(schedule.doctors().len(), 1);
        assert_eq!(schedule.doctors()[0].title, "Grey");
    }

    #[test]
    fn test_book_unknown_doctor_creates_placeholder() {
        let mut schedule = Schedule::default();

        let outcome = schedule.book(appt("D1", "Alice", "2024-01-01T09:00"));

        assert_eq!(outcome.created_doctor, Some(Doctor::new("D1", "Dr. D1")));
        assert!(outcome.replaced.is_empty());
        assert_eq!(schedule.doctors(), &[Doctor::new("D1", "Dr. D1")]);
        assert_eq!(schedule.appointments().len(), 1);

        let booked = &schedule.appointments()[0];
        assert_eq!(booked.id, "D1");
        assert_eq!(booked.title, "Alice");
        assert_eq!(booked.resource_id, "D1");
        assert_eq!(booked.start, booked.end);
        assert_eq!(booked.start_display(), "2024-01-01T09:00");
    }

    #[test]
    fn test_rebooking_replaces_previous_appointment() {
        let mut schedule = Schedule::default();
        schedule.book(appt("D1", "Alice", "2024-01-01T09:00"));

        let outcome = schedule.book(appt("D1", "Bob", "2024-01-01T11:30"));

        assert_eq!(outcome.replaced.len(), 1);
        assert_eq!(outcome.replaced[0].title, "Alice");
        assert_eq!(outcome.created_doctor, None);
        assert_eq!(schedule.doctors().len(), 1);
        assert_eq!(schedule.appointments().len(), 1);
        assert_eq!(schedule.appointment_for("D1").unwrap().title, "Bob");
        assert_eq!(
            schedule.appointment_for("D1").unwrap().start_display(),
            "2024-01-01T11:30"
        );
    }

    #[test]
    fn test_rebooking_moves_entry_to_end() {
        let mut schedule = Schedule::default();
        schedule.book(appt("D1", "Alice", "2024-01-01T09:00"));
        schedule.book(appt("D2", "Carol", "2024-01-01T10:00"));
        schedule.book(appt("D1", "Bob", "2024-01-01T12:00"));

        let order: Vec<_> = schedule.appointments().iter().map(|a| a.title.as_str()).collect();
        assert_eq!(order, vec!["Carol", "Bob"]);
    }

    #[test]
    fn test_one_appointment_per_doctor_after_each_booking() {
        let mut schedule = Schedule::default();
        let bookings = [
            ("D1", "A", "2024-01-01T09:00"),
            ("D2", "B", "2024-01-01T09:00"),
            ("D1", "C", "2024-01-02T09:00"),
            ("D1", "D", "2024-01-03T09:00"),
            ("D2", "E", "2024-01-01T10:00"),
        ];

        for (doctor, patient, time) in bookings {
            schedule.book(appt(doctor, patient, time));
            let count = schedule
                .appointments()
                .iter()
                .filter(|a| a.resource_id == doctor)
                .count();
            assert_eq!(count, 1);
            assert_eq!(schedule.appointment_for(doctor).unwrap().title, patient);
        }
    }

    #[test]
    fn test_stale_duplicates_are_all_replaced() {
        // Hand-edited storage may hold several entries for one doctor
        let mut schedule = Schedule::new(
            vec![Doctor::new("D1", "Grey")],
            vec![
                appt("D1", "Old 1", "2024-01-01T09:00"),
                appt("D1", "Old 2", "2024-01-01T10:00"),
            ],
        );

        let outcome = schedule.book(appt("D1", "New", "2024-01-01T11:00"));

        assert_eq!(outcome.replaced.len(), 2);
        assert_eq!(schedule.appointments().len(), 1);
    }

    #[test]
    fn test_doctor_name_falls_back_to_id() {
        let schedule = Schedule::new(vec![Doctor::new("D1", "Grey")], Vec::new());
        assert_eq!(schedule.doctor_name("D1"), "Grey");
        assert_eq!(schedule.doctor_name("D9"), "D9");
    }
}
