//! File-based store — durable key-value slots in a single JSON document.
//!
//! The file holds one JSON object mapping slot keys to their string values:
//!
//! ```json
//! { "selectedProductIds": "[3,1]" }
//! ```
//!
//! Storage location: `~/.shelfchat/storage.json` unless configured.

use shelfchat_core::error::StorageError;
use shelfchat_core::storage::KeyValueStore;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, warn};

/// A file-backed key-value store.
///
/// Slots are loaded into memory on creation and flushed to disk on every
/// mutation (set, remove). This gives fast reads with durable writes.
pub struct FileStore {
    path: PathBuf,
    slots: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Create a new file-based store at the given path.
    ///
    /// If the file exists, slots are loaded from it. A missing or corrupt
    /// file starts empty (the file is (re)written on first mutation).
    pub fn new(path: PathBuf) -> Self {
        let slots = Self::load_from_disk(&path);
        debug!(path = %path.display(), count = slots.len(), "File store loaded");
        Self {
            path,
            slots: RwLock::new(slots),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_from_disk(path: &Path) -> BTreeMap<String, String> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Unreadable storage file, starting empty");
                return BTreeMap::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(slots) => slots,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring corrupted storage file");
                BTreeMap::new()
            }
        }
    }

    /// Write all slots to disk.
    fn flush(&self, slots: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StorageError::Io(format!("Failed to create storage directory: {e}"))
                })?;
            }
        }

        let content = serde_json::to_string_pretty(slots)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        std::fs::write(&self.path, content)
            .map_err(|e| StorageError::Io(format!("Failed to write storage file: {e}")))
    }
}

fn poisoned<T>(_: T) -> StorageError {
    StorageError::Io("file store lock poisoned".into())
}

impl KeyValueStore for FileStore {
    fn name(&self) -> &str {
        "file"
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.read().map_err(poisoned)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.write().map_err(poisoned)?;
        slots.insert(key.to_string(), value.to_string());
        self.flush(&slots)
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        let mut slots = self.slots.write().map_err(poisoned)?;
        let removed = slots.remove(key).is_some();
        if removed {
            self.flush(&slots)?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_path() -> PathBuf {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_path_buf();
        drop(tmp); // Remove file so the store starts from nothing
        path
    }

    #[test]
    fn set_persists_across_reload() {
        let path = temp_path();

        let store = FileStore::new(path.clone());
        store.set("selectedProductIds", "[1]").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("selectedProductIds"));

        let reloaded = FileStore::new(path);
        assert_eq!(reloaded.get("selectedProductIds").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn remove_persists() {
        let path = temp_path();

        let store = FileStore::new(path.clone());
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        assert!(store.remove("a").unwrap());

        let reloaded = FileStore::new(path);
        assert_eq!(reloaded.get("a").unwrap(), None);
        assert_eq!(reloaded.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn handles_missing_file_gracefully() {
        let store = FileStore::new(temp_path());
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn corrupted_file_starts_empty_and_is_overwritten() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "{{ this is not json").unwrap();
        let path = tmp.path().to_path_buf();

        let store = FileStore::new(path.clone());
        assert_eq!(store.get("selectedProductIds").unwrap(), None);

        store.set("selectedProductIds", "[]").unwrap();
        let reloaded = FileStore::new(path);
        assert_eq!(reloaded.get("selectedProductIds").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn non_utf8_file_starts_empty_and_is_overwritten() {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(&[0xff, 0xfe, 0x00, 0x7b]).unwrap();
        let path = tmp.path().to_path_buf();

        let store = FileStore::new(path.clone());
        assert_eq!(store.get("selectedProductIds").unwrap(), None);

        store.set("selectedProductIds", "[7]").unwrap();
        let reloaded = FileStore::new(path);
        assert_eq!(reloaded.get("selectedProductIds").unwrap().as_deref(), Some("[7]"));
    }

    #[test]
    fn directory_in_place_of_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert_eq!(store.get("selectedProductIds").unwrap(), None);
        assert!(store.set("selectedProductIds", "[1]").is_err());
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        let store = FileStore::new(path.clone());
        store.set("k", "v").unwrap();
        assert!(path.exists());
    }
}
