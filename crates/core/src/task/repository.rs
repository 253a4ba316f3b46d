//! In-memory task repository
//!
//! Sole owner of the task collection. Durability is the caller's concern:
//! every successful mutation should be followed by a save through
//! [`TaskPersistence`](super::TaskPersistence).

use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

use super::model::{Task, TaskId, TaskInput};
use crate::ports::{Clock, IdGenerator, SystemClock, UuidIdGenerator};
use crate::view::TaskCounts;
use crate::{Error, Result};

/// Task collection with keyed access
///
/// Tasks are held in creation order (oldest first) with an id index for
/// O(1) update and toggle. Iteration yields newest-created first.
pub struct TaskRepository {
    tasks: Vec<Task>,
    index: HashMap<TaskId, usize>,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
    /// Latest `created_at` issued or loaded; new tasks never go earlier
    last_created: Option<DateTime<Utc>>,
}

impl Default for TaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskRepository {
    /// Create an empty repository using the system clock and random ids
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            index: HashMap::new(),
            clock: Box::new(SystemClock),
            ids: Box::new(UuidIdGenerator),
            last_created: None,
        }
    }

    /// Build a repository from a loaded collection, given newest first.
    ///
    /// Records that break the collection invariants are repaired or dropped:
    /// a repeated id keeps its first occurrence, a blank title is dropped,
    /// and `updated_at` is raised to `created_at` when it lags behind.
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();

        for mut task in tasks {
            if task.title.trim().is_empty() {
                warn!(task_id = %task.id, "Dropping stored task with empty title");
                continue;
            }
            if !seen.insert(task.id.clone()) {
                warn!(task_id = %task.id, "Dropping stored task with duplicate id");
                continue;
            }
            if task.updated_at < task.created_at {
                task.updated_at = task.created_at;
            }
            kept.push(task);
        }
        kept.reverse();

        let mut repo = Self::new();
        repo.last_created = kept.iter().map(|t| t.created_at).max();
        repo.tasks = kept;
        repo.reindex_from(0);
        repo
    }

    /// Use the given clock for timestamps
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Use the given generator for new task ids
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Create a task from validated input and prepend it to the collection
    pub fn create(&mut self, input: TaskInput) -> Result<Task> {
        let input = input.validated()?;

        let id = TaskId::new(self.ids.generate_id());
        if self.index.contains_key(&id) {
            return Err(Error::InvalidInput(format!(
                "Task with ID {} already exists",
                id
            )));
        }

        let now = self.clock.now();
        let created_at = match self.last_created {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_created = Some(created_at);

        let task = Task {
            id: id.clone(),
            title: input.title,
            description: input.description,
            status: input.status,
            created_at,
            updated_at: created_at,
        };

        self.index.insert(id, self.tasks.len());
        self.tasks.push(task.clone());

        debug!(task_id = %task.id, "Created task");
        Ok(task)
    }

    /// Replace title, description and status of an existing task
    pub fn update(&mut self, id: &TaskId, input: TaskInput) -> Result<Task> {
        let pos = self.position(id)?;
        let input = input.validated()?;
        let now = self.clock.now();

        let task = &mut self.tasks[pos];
        task.title = input.title;
        task.description = input.description;
        task.status = input.status;
        touch(task, now);

        debug!(task_id = %id, "Updated task");
        Ok(task.clone())
    }

    /// Flip pending and done
    pub fn toggle_status(&mut self, id: &TaskId) -> Result<Task> {
        let pos = self.position(id)?;
        let now = self.clock.now();

        let task = &mut self.tasks[pos];
        task.status = task.status.toggled();
        touch(task, now);

        debug!(task_id = %id, status = %task.status, "Toggled task status");
        Ok(task.clone())
    }

    /// Remove a task. Removing an absent id is a no-op and returns `None`.
    pub fn delete(&mut self, id: &TaskId) -> Option<Task> {
        let pos = self.index.remove(id)?;
        let task = self.tasks.remove(pos);
        self.reindex_from(pos);

        debug!(task_id = %id, "Deleted task");
        Some(task)
    }

    /// Get a task by ID
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.index.get(id).map(|&pos| &self.tasks[pos])
    }

    /// Iterate newest-created first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Task> + ExactSizeIterator {
        self.tasks.iter().rev()
    }

    /// Snapshot of the collection, newest-created first
    pub fn list(&self) -> Vec<Task> {
        self.iter().cloned().collect()
    }

    /// Totals by status across the whole collection
    pub fn counts(&self) -> TaskCounts {
        TaskCounts::from_tasks(self.iter())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn position(&self, id: &TaskId) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| Error::TaskNotFound(id.clone()))
    }

    fn reindex_from(&mut self, start: usize) {
        for (pos, task) in self.tasks.iter().enumerate().skip(start) {
            self.index.insert(task.id.clone(), pos);
        }
    }
}

/// Bump `updated_at`, never moving it backwards
fn touch(task: &mut Task, now: DateTime<Utc>) {
    task.updated_at = now.max(task.updated_at).max(task.created_at);
}
