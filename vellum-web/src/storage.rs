use gloo_storage::{LocalStorage, Storage as _};
use vellum_client::{Storage, StorageError};

/// `vellum_client::Storage` backed by the browser's local storage. One page
/// context at a time; writes from other tabs are last-write-wins.
pub struct BrowserStorage;

impl Storage for BrowserStorage {
    fn raw_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn raw_set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // set_item rejects when the medium is missing or full (quota)
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|_| StorageError::Unavailable)
    }

    fn delete(&self, key: &str) {
        let _ = LocalStorage::raw().remove_item(key);
    }
}
