//! Key-value store with automatic serialization.

use crate::StoreError;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Type-safe key-value store backed by one JSON file per key.
///
/// Writes replace the whole value, matching the page's persistence model:
/// there is no partial or incremental update. Reads of a corrupt file
/// return [`StoreError::CorruptValue`] so callers can decide to fall back
/// to a default rather than fail.
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open a store rooted at the given directory, creating it if needed.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|e| StoreError::OpenError(e.to_string()))?;
        Ok(Self { root })
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.key_path(key)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::IoError(e.to_string())),
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| StoreError::CorruptValue {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    /// Set a value in the store, replacing any previous value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let path = self.key_path(key)?;
        let bytes = serde_json::to_vec(value)?;

        // Write to a sibling temp file first so a failed write never
        // truncates the previous value.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    /// Delete a value from the store. Deleting an absent key is a no-op.
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::IoError(e.to_string())),
        }
    }

    /// Check if a key exists in the store.
    pub fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.key_path(key)?.exists())
    }

    /// Get all keys in the store.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if let Some(key) = name.strip_suffix(".json") {
                keys.push(key.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
    struct Entry {
        name: String,
        quantity: u32,
    }

    fn open_temp() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_set_then_get() {
        let (_dir, store) = open_temp();
        let entry = Entry {
            name: "Kiwi".to_string(),
            quantity: 2,
        };

        store.set("fruit-cart", &entry).unwrap();
        let back: Option<Entry> = store.get("fruit-cart").unwrap();
        assert_eq!(back, Some(entry));
    }

    #[test]
    fn test_get_missing_key() {
        let (_dir, store) = open_temp();
        let value: Option<Entry> = store.get("fruit-cart").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_set_replaces_whole_value() {
        let (_dir, store) = open_temp();
        store.set("fruit-cart", &vec![1, 2, 3]).unwrap();
        store.set("fruit-cart", &vec![9]).unwrap();

        let back: Option<Vec<i32>> = store.get("fruit-cart").unwrap();
        assert_eq!(back, Some(vec![9]));
    }

    #[test]
    fn test_corrupt_value_is_reported_not_fatal() {
        let (dir, store) = open_temp();
        std::fs::write(dir.path().join("fruit-cart.json"), b"{not json").unwrap();

        let err = store.get::<Entry>("fruit-cart").unwrap_err();
        assert!(matches!(err, StoreError::CorruptValue { .. }));
    }

    #[test]
    fn test_delete_and_exists() {
        let (_dir, store) = open_temp();
        store.set("theme", &"dark").unwrap();
        assert!(store.exists("theme").unwrap());

        store.delete("theme").unwrap();
        assert!(!store.exists("theme").unwrap());

        // Deleting again is a no-op.
        store.delete("theme").unwrap();
    }

    #[test]
    fn test_keys_listing() {
        let (_dir, store) = open_temp();
        store.set("fruit-cart", &vec![1]).unwrap();
        store.set("theme", &"light").unwrap();

        assert_eq!(store.keys().unwrap(), vec!["fruit-cart", "theme"]);
    }

    #[test]
    fn test_invalid_key_rejected() {
        let (_dir, store) = open_temp();
        let err = store.set("../escape", &1).unwrap_err();
        assert!(matches!(err, StoreError::InvalidKey(_)));
    }
}
