//! Task persistence adapter
//!
//! Serializes the whole collection as one JSON array into a single named
//! slot. Loading never fails: an absent, unreadable or unparsable slot
//! yields an empty collection.

use serde_json::Value;
use tracing::{debug, warn};

use super::model::Task;
use crate::store::{validate_key, KeyValueStore};
use crate::Result;

/// Slot name used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "tm_tasks_v1";

/// Loads and saves the task collection through a [`KeyValueStore`]
pub struct TaskPersistence<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> TaskPersistence<S> {
    /// Persist under [`DEFAULT_STORAGE_KEY`]
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    /// Persist under a custom slot name
    pub fn with_key(store: S, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        validate_key(&key)?;
        Ok(Self { store, key })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the saved collection, newest first. Empty on any failure.
    pub fn load(&self) -> Vec<Task> {
        match self.try_load() {
            Ok(tasks) => {
                debug!(key = %self.key, count = tasks.len(), "Loaded tasks");
                tasks
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to load tasks, starting empty");
                Vec::new()
            }
        }
    }

    fn try_load(&self) -> Result<Vec<Task>> {
        let Some(content) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };
        // A stored `null` counts as empty
        let records: Option<Vec<Value>> = serde_json::from_str(&content)?;

        // One malformed record must not cost the rest of the collection
        let tasks = records
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .filter_map(|(pos, record)| match serde_json::from_value::<Task>(record) {
                Ok(task) => Some(task),
                Err(e) => {
                    warn!(key = %self.key, position = pos, error = %e, "Dropping unreadable stored task");
                    None
                }
            })
            .collect();
        Ok(tasks)
    }

    /// Overwrite the slot with the given collection
    pub fn save<'a>(&mut self, tasks: impl IntoIterator<Item = &'a Task>) -> Result<()> {
        let tasks: Vec<&Task> = tasks.into_iter().collect();
        let content = serde_json::to_string(&tasks)?;
        self.store.set(&self.key, &content)?;

        debug!(key = %self.key, count = tasks.len(), "Saved tasks");
        Ok(())
    }
}
