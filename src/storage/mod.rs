//! Clinic Calendar Storage
//!
//! Persistence is a synchronous string key-value store, modelled on browser
//! local storage:
//!
//! - **kv**: the [`KeyValueStore`] trait and an in-memory store
//! - **file**: a write-through JSON document on disk
//! - **sqlite**: a `kv` table in a SQLite database
//! - **repository**: typed load/save of the `"doctors"` and `"events"` arrays
//! - **error**: Error types
//!
//! # Layout
//!
//! ```text
//! "doctors" → [{"id":"D1","title":"Dr. D1"}, ...]
//! "events"  → [{"id":"D1","title":"Alice","start":"2024-01-01T09:00",
//!               "end":"2024-01-01T09:00","resourceId":"D1"}, ...]
//! ```

pub mod error;
#[cfg(feature = "native")]
pub mod file;
pub mod kv;
pub mod repository;
#[cfg(feature = "native")]
pub mod sqlite;

pub use error::{StorageError, StorageResult};
#[cfg(feature = "native")]
pub use file::JsonFileStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use repository::{BookingRepository, DOCTORS_KEY, EVENTS_KEY};
#[cfg(feature = "native")]
pub use sqlite::SqliteStore;

#[cfg(feature = "native")]
pub use backend::{open_store, StorageBackend};

#[cfg(feature = "native")]
mod backend {
    use super::*;
    use serde::Deserialize;
    use std::path::Path;

    /// Which store implementation backs the CLI
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum StorageBackend {
        Memory,
        #[default]
        Json,
        Sqlite,
    }

    impl std::str::FromStr for StorageBackend {
        type Err = StorageError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_lowercase().as_str() {
                "memory" => Ok(StorageBackend::Memory),
                "json" => Ok(StorageBackend::Json),
                "sqlite" => Ok(StorageBackend::Sqlite),
                other => Err(StorageError::Unavailable(format!(
                    "unknown storage backend '{}' (expected memory, json or sqlite)",
                    other
                ))),
            }
        }
    }

    impl std::fmt::Display for StorageBackend {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                StorageBackend::Memory => write!(f, "memory"),
                StorageBackend::Json => write!(f, "json"),
                StorageBackend::Sqlite => write!(f, "sqlite"),
            }
        }
    }

    /// Open the configured backend rooted at `data_dir`
    pub fn open_store(
        backend: StorageBackend,
        data_dir: &Path,
    ) -> StorageResult<Box<dyn KeyValueStore>> {
        tracing::debug!("Opening {} store in {:?}", backend, data_dir);
        let store: Box<dyn KeyValueStore> = match backend {
            StorageBackend::Memory => Box::new(MemoryStore::new()),
            StorageBackend::Json => Box::new(JsonFileStore::in_dir(data_dir)?),
            StorageBackend::Sqlite => Box::new(SqliteStore::in_dir(data_dir)?),
        };
        Ok(store)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use tempfile::tempdir;

        #[test]
        fn test_backend_parse() {
            assert_eq!("json".parse::<StorageBackend>().unwrap(), StorageBackend::Json);
            assert_eq!("SQLite".parse::<StorageBackend>().unwrap(), StorageBackend::Sqlite);
            assert!("redis".parse::<StorageBackend>().is_err());
        }

        #[test]
        fn test_open_each_backend() {
            let dir = tempdir().unwrap();
            for backend in [StorageBackend::Memory, StorageBackend::Json, StorageBackend::Sqlite] {
                let mut store = open_store(backend, dir.path()).unwrap();
                store.set_item(EVENTS_KEY, "[]").unwrap();
                assert_eq!(store.get_item(EVENTS_KEY).unwrap().as_deref(), Some("[]"));
            }
        }
    }
}
