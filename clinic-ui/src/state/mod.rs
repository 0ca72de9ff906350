//! State Management
//!
//! Booking state shared across the screen, and the local storage backend.

pub mod global;
pub mod local_storage;

pub use global::{provide_booking_state, BookingState};
pub use local_storage::WebStorage;
