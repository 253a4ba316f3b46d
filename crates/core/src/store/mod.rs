//! Durable key-value slots
//!
//! The task collection lives in a single named slot. These stores only move
//! strings in and out; serialization belongs to
//! [`TaskPersistence`](crate::task::TaskPersistence).

mod file_store;
mod memory_store;

pub use file_store::FileKeyValueStore;
pub use memory_store::MemoryKeyValueStore;

use crate::{Error, Result};

/// A store of named string slots
pub trait KeyValueStore {
    /// Read a slot. An absent slot is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a slot
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Slot names must be non-empty and limited to `[A-Za-z0-9_.-]`
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!("Invalid storage key: {:?}", key)))
    }
}
