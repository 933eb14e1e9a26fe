//! No-op store — disables persistence entirely.

use shelfchat_core::error::StorageError;
use shelfchat_core::storage::KeyValueStore;

/// A store that remembers nothing.
pub struct NoopStore;

impl KeyValueStore for NoopStore {
    fn name(&self) -> &str { "none" }

    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<bool, StorageError> {
        Ok(false)
    }
}
