//! # Clinic Calendar
//!
//! Appointment booking on a day/week/month calendar: doctors are calendar
//! resources, patient appointments are events, and both collections live in
//! a string key-value store (browser local storage in the web UI, a JSON file
//! or SQLite database on the command line).
//!
//! ## Rules
//!
//! - Doctor ids are unique; re-submitting a known id changes nothing.
//! - A doctor holds at most one appointment; booking again replaces it.
//! - Booking for an unknown doctor id creates `Dr. {id}`.
//! - Every mutation is persisted before the handler returns.
//!
//! ## Modules
//!
//! - [`booking`]: records, forms, rules and the booking service
//! - [`storage`]: key-value stores and the collection repository
//! - [`calendar`]: view modes, options, binder and layout
//! - `config`, `export`, `logging`: native-only ambient pieces
//!
//! ## Quick Start
//!
//! ```rust
//! use clinic_calendar::booking::{AppointmentForm, BookingService};
//! use clinic_calendar::calendar::CalendarBinder;
//! use clinic_calendar::storage::MemoryStore;
//!
//! let mut service = BookingService::load(MemoryStore::new()).unwrap();
//!
//! let mut form = AppointmentForm {
//!     email: "alice@example.com".into(),
//!     name: "Alice".into(),
//!     doctor: "D1".into(),
//!     appointment_time: "2024-01-01T09:00".into(),
//! };
//! service.submit_appointment(&mut form).unwrap();
//!
//! assert_eq!(service.schedule().doctors()[0].title, "Dr. D1");
//!
//! let mut binder = CalendarBinder::default();
//! binder.sync_schedule(service.schedule());
//! assert_eq!(binder.events().count(), 1);
//! ```

pub mod booking;
pub mod calendar;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod export;
#[cfg(feature = "native")]
pub mod logging;
pub mod storage;

// Re-export top-level types for convenience
pub use booking::{
    Appointment, AppointmentForm, BookingError, BookingOutcome, BookingResult, BookingService,
    Doctor, DoctorForm, DoctorOutcome, FormError, Schedule,
};

pub use calendar::{CalendarBinder, CalendarEvent, CalendarOptions, CalendarView, Resource};

pub use storage::{
    BookingRepository, KeyValueStore, MemoryStore, StorageError, StorageResult, DOCTORS_KEY,
    EVENTS_KEY,
};

#[cfg(feature = "native")]
pub use storage::{open_store, JsonFileStore, SqliteStore, StorageBackend};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig, StorageConfig};
