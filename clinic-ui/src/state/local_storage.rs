//! Browser Local Storage
//!
//! `window.localStorage` as a [`KeyValueStore`].

use clinic_calendar::storage::{KeyValueStore, StorageError, StorageResult};
use wasm_bindgen::JsValue;

/// Handle to the page's local storage area
#[derive(Clone)]
pub struct WebStorage {
    storage: web_sys::Storage,
}

impl WebStorage {
    /// Get the local storage handle, if the browser exposes one
    pub fn local() -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window object".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;

        Ok(Self { storage })
    }
}

impl KeyValueStore for WebStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        // Fails when the quota is exceeded
        self.storage.set_item(key, value).map_err(js_error)
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        self.storage.remove_item(key).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> StorageError {
    StorageError::Unavailable(format!("{:?}", err))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_round_trip() {
        let mut store = WebStorage::local().unwrap();

        store.set_item("clinic_test_key", "[]").unwrap();
        assert_eq!(store.get_item("clinic_test_key").unwrap().as_deref(), Some("[]"));

        store.remove_item("clinic_test_key").unwrap();
        assert_eq!(store.get_item("clinic_test_key").unwrap(), None);
    }
}
