//! Storage trait — durable key-value slots.
//!
//! The widget persists a handful of small values (the selection) under
//! fixed keys. Access is synchronous: a write completes before the calling
//! operation returns.
//!
//! Implementations: file (JSON on disk), in-memory (for testing), none (no-op).

use crate::error::StorageError;

/// The core KeyValueStore trait.
pub trait KeyValueStore: Send + Sync {
    /// The backend name (e.g., "file", "memory", "none").
    fn name(&self) -> &str;

    /// Read the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Returns whether a value was present.
    fn remove(&self, key: &str) -> Result<bool, StorageError>;
}
