//! File-backed key-value storage.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use monthcal_core::storage::{KeyValueStore, Result, StorageError};

/// Key-value storage keeping one `<key>.json` file per key in a directory.
///
/// The directory is created on the first write. Writes replace the file in
/// place; a crash mid-write may lose the latest change.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`. Characters outside `[A-Za-z0-9_-]`
    /// are replaced so a key can never escape the directory.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{file_name}.json"))
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let write_failed = |e: std::io::Error| StorageError::WriteFailed {
            key: key.to_string(),
            message: e.to_string(),
        };
        fs::create_dir_all(&self.dir).map_err(write_failed)?;
        fs::write(self.path_for(key), value).map_err(write_failed)?;
        tracing::trace!(key, bytes = value.len(), "Wrote storage file");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::WriteFailed {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use monthcal_core::calendar::EventDraft;
    use monthcal_core::EventStore;
    use uuid::Uuid;

    /// A fresh directory under the system temp dir, removed on drop.
    struct TempDir(PathBuf);

    impl TempDir {
        fn new() -> Self {
            Self(std::env::temp_dir().join(format!("monthcal-test-{}", Uuid::new_v4())))
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn test_get_missing_file() {
        let dir = TempDir::new();
        let storage = FileStorage::new(&dir.0);
        assert_eq!(storage.get("EVENTS").unwrap(), None);
    }

    #[test]
    fn test_set_creates_directory_and_file() {
        let dir = TempDir::new();
        let storage = FileStorage::new(&dir.0);

        storage.set("EVENTS", "[]").unwrap();

        assert!(storage.path_for("EVENTS").exists());
        assert_eq!(storage.get("EVENTS").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = TempDir::new();
        let storage = FileStorage::new(&dir.0);
        storage.set("EVENTS", "[]").unwrap();

        storage.remove("EVENTS").unwrap();
        storage.remove("EVENTS").unwrap();

        assert_eq!(storage.get("EVENTS").unwrap(), None);
    }

    #[test]
    fn test_path_for_sanitizes_key() {
        let storage = FileStorage::new("/data");
        assert_eq!(
            storage.path_for("../etc/passwd"),
            PathBuf::from("/data/___etc_passwd.json")
        );
        assert_eq!(storage.path_for("EVENTS"), PathBuf::from("/data/EVENTS.json"));
    }

    #[test]
    fn test_event_store_survives_restart() {
        let dir = TempDir::new();
        let date = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        let mut store = EventStore::open(FileStorage::new(&dir.0));
        let id = store.add(EventDraft::all_day("Birthday", date));
        drop(store);

        let reopened = EventStore::open(FileStorage::new(&dir.0));
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.get(&id).unwrap().date, date);
    }

    #[test]
    fn test_corrupt_file_opens_empty() {
        let dir = TempDir::new();
        let storage = FileStorage::new(&dir.0);
        storage.set("EVENTS", "not json at all").unwrap();

        let store = EventStore::open(storage);

        assert!(store.is_empty());
    }
}
