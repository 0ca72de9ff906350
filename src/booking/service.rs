//! Booking service
//!
//! Wires the form handlers to the schedule and the store. Every successful
//! mutation is written back synchronously before the call returns; a
//! duplicate doctor submission writes nothing.

use crate::booking::error::BookingResult;
use crate::booking::forms::{AppointmentForm, DoctorForm};
use crate::booking::schedule::{BookingOutcome, DoctorOutcome, Schedule};
use crate::booking::types::{Appointment, Doctor};
use crate::storage::{BookingRepository, KeyValueStore, StorageError};

/// Booking state plus the store it is persisted to
#[derive(Debug)]
pub struct BookingService<S> {
    repo: BookingRepository<S>,
    schedule: Schedule,
}

impl<S: KeyValueStore> BookingService<S> {
    /// Load both collections from `store`
    pub fn load(store: S) -> BookingResult<Self> {
        let repo = BookingRepository::new(store);
        let doctors = repo.load_doctors()?;
        let appointments = repo.load_appointments()?;

        tracing::info!(
            "Loaded {} doctors and {} appointments",
            doctors.len(),
            appointments.len()
        );

        Ok(Self {
            repo,
            schedule: Schedule::new(doctors, appointments),
        })
    }

    /// Load each collection on its own. A key that cannot be read starts
    /// empty and its error is returned; keys that did load are kept, so the
    /// next mutation does not overwrite them.
    pub fn load_lenient(store: S) -> (Self, Vec<StorageError>) {
        let repo = BookingRepository::new(store);
        let mut errors = Vec::new();

        let doctors = repo.load_doctors().unwrap_or_else(|e| {
            tracing::error!("Starting with no doctors: {}", e);
            errors.push(e);
            Vec::new()
        });
        let appointments = repo.load_appointments().unwrap_or_else(|e| {
            tracing::error!("Starting with no appointments: {}", e);
            errors.push(e);
            Vec::new()
        });

        let service = Self {
            repo,
            schedule: Schedule::new(doctors, appointments),
        };
        (service, errors)
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn store(&self) -> &S {
        self.repo.store()
    }

    pub fn into_store(self) -> S {
        self.repo.into_inner()
    }

    /// Doctor form submit: validate, add, persist, reset the form
    pub fn submit_doctor(&mut self, form: &mut DoctorForm) -> BookingResult<DoctorOutcome> {
        let doctor = form.to_doctor()?;
        let outcome = self.add_doctor(doctor)?;
        form.reset();
        Ok(outcome)
    }

    /// Appointment form submit: validate, book, persist, reset the form
    pub fn submit_appointment(
        &mut self,
        form: &mut AppointmentForm,
    ) -> BookingResult<BookingOutcome> {
        let appointment = form.to_appointment()?;
        let outcome = self.book(appointment)?;
        form.reset();
        Ok(outcome)
    }

    /// Add a doctor. The in-memory schedule only changes once the doctor
    /// list has been written.
    pub fn add_doctor(&mut self, doctor: Doctor) -> BookingResult<DoctorOutcome> {
        let id = doctor.id.clone();
        let mut next = self.schedule.clone();

        let outcome = next.add_doctor(doctor);
        match outcome {
            DoctorOutcome::Added => {
                self.repo.save_doctors(next.doctors())?;
                self.schedule = next;
                tracing::info!("Added doctor {}", id);
            }
            DoctorOutcome::AlreadyKnown => {
                tracing::warn!("Doctor {} already exists, ignoring", id);
            }
        }

        Ok(outcome)
    }

    /// Book an appointment. Doctors are written before events so stored
    /// events never name an unstored doctor; on failure the schedule is left
    /// as it was.
    pub fn book(&mut self, appointment: Appointment) -> BookingResult<BookingOutcome> {
        let doctor_id = appointment.resource_id.clone();
        let start = appointment.start_display();

        let mut next = self.schedule.clone();
        let outcome = next.book(appointment);

        if outcome.created_doctor.is_some() {
            self.repo.save_doctors(next.doctors())?;
        }
        if let Err(e) = self.repo.save_appointments(next.appointments()) {
            if outcome.created_doctor.is_some() {
                if let Err(undo) = self.repo.save_doctors(self.schedule.doctors()) {
                    tracing::error!("Could not restore doctor list: {}", undo);
                }
            }
            return Err(e.into());
        }
        self.schedule = next;

        if let Some(doctor) = &outcome.created_doctor {
            tracing::info!("Created doctor {} for new booking", doctor.title);
        }
        if outcome.replaced.is_empty() {
            tracing::info!("Booked {} at {}", doctor_id, start);
        } else {
            tracing::info!(
                "Booked {} at {} (replaced {} earlier appointment(s))",
                doctor_id,
                start,
                outcome.replaced.len()
            );
        }

        Ok(outcome)
    }
}
