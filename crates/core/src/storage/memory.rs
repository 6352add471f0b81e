//! In-process storage backends.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{KeyValueStore, Result, StorageError};

/// In-memory key-value storage.
///
/// Clones share the same map, so a test can keep a handle and inspect what
/// the store persisted. Data is lost when the last handle is dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Creates a new empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage with `key` pre-populated, as if written earlier.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        if let Ok(mut slots) = storage.slots.write() {
            slots.insert(key.into(), value.into());
        }
        storage
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let slots = self.slots.read().map_err(|e| StorageError::ReadFailed {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.write().map_err(|e| StorageError::WriteFailed {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut slots = self.slots.write().map_err(|e| StorageError::WriteFailed {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        slots.remove(key);
        Ok(())
    }
}

/// Storage that remembers nothing. Reads are always empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStorage;

impl KeyValueStore for NoopStorage {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Ok(())
    }
}
