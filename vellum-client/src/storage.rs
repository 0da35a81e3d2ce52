use std::collections::HashMap;

use parking_lot::Mutex;
use serde::{de::DeserializeOwned, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("storage medium is unavailable or full")]
    Unavailable,

    #[error("stored value for key {0:?} is not valid JSON")]
    Corrupted(String),
}

/// String-keyed, JSON-valued persistence medium. Process-local and
/// single-writer-at-a-time; concurrent writers (e.g. two open tabs over the
/// same browser storage) can lose updates.
pub trait Storage {
    fn raw_get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn raw_set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn delete(&self, key: &str);

    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.raw_get(key)? {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|_| StorageError::Corrupted(key.to_string())),
        }
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)
            .map_err(|_| StorageError::Corrupted(key.to_string()))?;
        self.raw_set(key, &raw)
    }
}

/// In-memory backing, for tests and native callers.
#[derive(Debug, Default)]
pub struct MemoryStorage(Mutex<HashMap<String, String>>);

impl MemoryStorage {
    pub fn new() -> MemoryStorage {
        MemoryStorage::default()
    }
}

impl Storage for MemoryStorage {
    fn raw_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.0.lock().get(key).cloned())
    }

    fn raw_set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) {
        self.0.lock().remove(key);
    }
}
