//! Global Application State
//!
//! Reactive mirrors of the booking collections plus the calendar binder.
//! Mutations go through the shared [`BookingService`], which writes to local
//! storage before the signals are refreshed.

use chrono::NaiveDate;
use clinic_calendar::booking::{
    Appointment, AppointmentForm, BookingError, BookingOutcome, BookingService, Doctor, DoctorForm,
    DoctorOutcome,
};
use clinic_calendar::calendar::{CalendarBinder, CalendarOptions, CalendarView};
use clinic_calendar::storage::{KeyValueStore, MemoryStore};
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::state::local_storage::WebStorage;

type Store = Box<dyn KeyValueStore>;

/// State shared by every component on the booking screen
#[derive(Clone)]
pub struct BookingState {
    service: Rc<RefCell<BookingService<Store>>>,
    /// Doctors, in insertion order
    pub doctors: RwSignal<Vec<Doctor>>,
    /// Appointments, in insertion order
    pub appointments: RwSignal<Vec<Appointment>>,
    /// What the calendar displays; re-synced whenever either collection changes
    pub binder: RwSignal<CalendarBinder>,
    /// Date the calendar is anchored on
    pub anchor: RwSignal<NaiveDate>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide booking state to the component tree
pub fn provide_booking_state() {
    let (service, load_error) = load_service();

    let (doctors, appointments) = {
        let schedule = service.schedule();
        (schedule.doctors().to_vec(), schedule.appointments().to_vec())
    };

    let state = BookingState {
        service: Rc::new(RefCell::new(service)),
        doctors: create_rw_signal(doctors),
        appointments: create_rw_signal(appointments),
        binder: create_rw_signal(CalendarBinder::new(CalendarOptions::default())),
        anchor: create_rw_signal(chrono::Local::now().date_naive()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    // Declarative re-sync: one event source, replaced on every change
    let binder = state.binder;
    let doctors = state.doctors;
    let appointments = state.appointments;
    create_effect(move |_| {
        doctors.with(|d| appointments.with(|a| binder.update(|b| b.sync(d, a))));
    });

    if let Some(message) = load_error {
        state.show_error(&message);
    }

    provide_context(state);
}

fn open_store() -> Store {
    match WebStorage::local() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            web_sys::console::error_1(
                &format!("Local storage unavailable, bookings will not persist: {}", e).into(),
            );
            Box::new(MemoryStore::new())
        }
    }
}

/// Load stored bookings. A key that cannot be read starts empty and is left
/// untouched in storage until the next mutation of that collection; the other
/// key keeps its data.
fn load_service() -> (BookingService<Store>, Option<String>) {
    let (service, errors) = BookingService::load_lenient(open_store());
    if errors.is_empty() {
        return (service, None);
    }

    let details: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    let message = format!("Could not load saved bookings: {}", details.join("; "));
    web_sys::console::error_1(&message.clone().into());
    (service, Some(message))
}

impl BookingState {
    /// Doctor form submit
    pub fn submit_doctor(&self, form: &mut DoctorForm) -> Result<DoctorOutcome, BookingError> {
        let outcome = self.service.borrow_mut().submit_doctor(form)?;
        self.refresh();
        Ok(outcome)
    }

    /// Appointment form submit
    pub fn submit_appointment(
        &self,
        form: &mut AppointmentForm,
    ) -> Result<BookingOutcome, BookingError> {
        let outcome = self.service.borrow_mut().submit_appointment(form)?;
        self.refresh();
        Ok(outcome)
    }

    /// Switch the calendar's display mode
    pub fn change_view(&self, view: CalendarView) {
        self.binder.update(|b| b.change_view(view));
    }

    /// Move the anchor date by whole views (months, weeks or days)
    pub fn step(&self, forward: bool) {
        let view = self.binder.with(|b| b.view());
        self.anchor.update(|date| *date = step_date(*date, view, forward));
    }

    pub fn today(&self) {
        self.anchor.set(chrono::Local::now().date_naive());
    }

    /// Display name for a doctor id
    pub fn doctor_name(&self, id: &str) -> String {
        self.doctors.with(|doctors| {
            doctors
                .iter()
                .find(|d| d.id == id)
                .map(|d| d.title.clone())
                .unwrap_or_else(|| id.to_string())
        })
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    fn refresh(&self) {
        let service = self.service.borrow();
        let schedule = service.schedule();

        if self.doctors.with_untracked(|d| d.as_slice() != schedule.doctors()) {
            self.doctors.set(schedule.doctors().to_vec());
        }
        if self.appointments.with_untracked(|a| a.as_slice() != schedule.appointments()) {
            self.appointments.set(schedule.appointments().to_vec());
        }
    }
}

/// Anchor date one view-length before or after `date`
pub fn step_date(date: NaiveDate, view: CalendarView, forward: bool) -> NaiveDate {
    use chrono::{Duration, Months};

    match (view, forward) {
        (CalendarView::ResourceTimeGridDay, true) => date + Duration::days(1),
        (CalendarView::ResourceTimeGridDay, false) => date - Duration::days(1),
        (CalendarView::TimeGridWeek, true) => date + Duration::days(7),
        (CalendarView::TimeGridWeek, false) => date - Duration::days(7),
        (CalendarView::DayGridMonth, true) => date.checked_add_months(Months::new(1)).unwrap_or(date),
        (CalendarView::DayGridMonth, false) => date.checked_sub_months(Months::new(1)).unwrap_or(date),
    }
}
