use super::Result;

/// Durable string key-value storage, the shape of a browser's local storage.
///
/// Implementations are called synchronously from the owner of the event
/// store; they do not need to be thread-safe.
pub trait KeyValueStore {
    /// Gets the value stored under `key`, or `None` when the slot is empty.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Clears the slot. Removing an empty slot is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
