//! Booking collections on top of a key-value store
//!
//! Each collection is one JSON array under a fixed key. A missing key loads
//! as an empty collection; a value that does not parse is reported as
//! [`StorageError::Corrupt`].

use crate::booking::types::{Appointment, Doctor};
use crate::storage::error::{StorageError, StorageResult};
use crate::storage::kv::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Key holding the appointment (event) array
pub const EVENTS_KEY: &str = "events";

/// Key holding the doctor (resource) array
pub const DOCTORS_KEY: &str = "doctors";

/// Typed load/save of the doctor and appointment collections
#[derive(Debug)]
pub struct BookingRepository<S> {
    store: S,
}

impl<S: KeyValueStore> BookingRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load_doctors(&self) -> StorageResult<Vec<Doctor>> {
        self.load_collection(DOCTORS_KEY)
    }

    pub fn save_doctors(&mut self, doctors: &[Doctor]) -> StorageResult<()> {
        self.save_collection(DOCTORS_KEY, doctors)
    }

    pub fn load_appointments(&self) -> StorageResult<Vec<Appointment>> {
        self.load_collection(EVENTS_KEY)
    }

    pub fn save_appointments(&mut self, appointments: &[Appointment]) -> StorageResult<()> {
        self.save_collection(EVENTS_KEY, appointments)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    fn load_collection<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Vec<T>> {
        let raw = match self.store.get_item(key)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        // A literal null means nothing stored
        let items: Option<Vec<T>> =
            serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt {
                key: key.to_string(),
                error: e.to_string(),
            })?;
        let items = items.unwrap_or_default();

        tracing::debug!("Loaded {} records from '{}'", items.len(), key);
        Ok(items)
    }

    fn save_collection<T: Serialize>(&mut self, key: &str, items: &[T]) -> StorageResult<()> {
        let raw = serde_json::to_string(items)?;
        self.store.set_item(key, &raw)?;
        tracing::debug!("Saved {} records to '{}'", items.len(), key);
        Ok(())
    }
}
