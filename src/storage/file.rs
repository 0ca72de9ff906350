//! JSON file store
//!
//! Keeps every key in one JSON object on disk, the closest native analogue
//! of a browser's local storage area. Writes go through to disk on every
//! `set_item`/`remove_item`; the file is replaced atomically via a temp
//! file + rename.

use crate::storage::error::{StorageError, StorageResult};
use crate::storage::kv::KeyValueStore;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File name used inside the data directory
pub const LOCAL_STORAGE_FILE: &str = "local_storage.json";

/// Write-through JSON document store
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open (or lazily create) the store at `path`
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();

        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
                    key: path.display().to_string(),
                    error: e.to_string(),
                })?
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!("Opened JSON store {:?} ({} keys)", path, entries.len());

        Ok(Self { path, entries })
    }

    /// Open the store file inside a data directory
    pub fn in_dir(data_dir: &Path) -> StorageResult<Self> {
        Self::open(data_dir.join(LOCAL_STORAGE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(&self.entries)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();

        {
            let mut store = JsonFileStore::in_dir(dir.path()).unwrap();
            store.set_item("doctors", "[{\"id\":\"D1\",\"title\":\"Dr. D1\"}]").unwrap();
            store.set_item("events", "[]").unwrap();
        }

        let store = JsonFileStore::in_dir(dir.path()).unwrap();
        assert_eq!(
            store.get_item("doctors").unwrap().as_deref(),
            Some("[{\"id\":\"D1\",\"title\":\"Dr. D1\"}]")
        );
        assert_eq!(store.get_item("events").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_creates_missing_data_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let mut store = JsonFileStore::in_dir(&nested).unwrap();
        store.set_item("events", "[]").unwrap();

        assert!(nested.join(LOCAL_STORAGE_FILE).exists());
    }

    #[test]
    fn test_remove_item_persists() {
        let dir = tempdir().unwrap();

        let mut store = JsonFileStore::in_dir(dir.path()).unwrap();
        store.set_item("events", "[]").unwrap();
        store.remove_item("events").unwrap();

        let store = JsonFileStore::in_dir(dir.path()).unwrap();
        assert_eq!(store.get_item("events").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(LOCAL_STORAGE_FILE), "not json").unwrap();

        let result = JsonFileStore::in_dir(dir.path());
        assert!(matches!(result, Err(StorageError::Corrupt { .. })));
    }
}
