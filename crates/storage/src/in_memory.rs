//! In-memory store — useful for testing and ephemeral sessions.

use shelfchat_core::error::StorageError;
use shelfchat_core::storage::KeyValueStore;
use std::collections::HashMap;
use std::sync::RwLock;

/// A store that keeps slots in a HashMap for the lifetime of the process.
pub struct InMemoryStore {
    slots: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: T) -> StorageError {
    StorageError::Io("in-memory store lock poisoned".into())
}

impl KeyValueStore for InMemoryStore {
    fn name(&self) -> &str { "memory" }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.read().map_err(poisoned)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .write()
            .map_err(poisoned)?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.slots.write().map_err(poisoned)?.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "[1,2]").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[1,2]"));

        store.set("k", "[]").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[]"));

        assert!(store.remove("k").unwrap());
        assert!(!store.remove("k").unwrap());
    }
}
