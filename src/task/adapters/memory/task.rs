//! In-memory task store.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Clones share the same underlying map. Writers take the write lock and
/// readers the read lock, so readers may overlap each other but never a
/// writer.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the lock is poisoned.
    pub fn len(&self) -> TaskStoreResult<usize> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        Ok(tasks.len())
    }

    /// Returns `true` when the store holds no tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the lock is poisoned.
    pub fn is_empty(&self) -> TaskStoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

fn poisoned<T>(err: PoisonError<T>) -> TaskStoreError {
    TaskStoreError::persistence(std::io::Error::other(err.to_string()))
}

impl TaskStore for InMemoryTaskStore {
    fn save(&self, task: &Task) -> TaskStoreResult<()> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        tasks.insert(task.id(), task.clone());
        Ok(())
    }

    fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Task> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        tasks.get(&id).cloned().ok_or(TaskStoreError::NotFound(id))
    }

    fn find_by_status(&self, status: TaskStatus) -> TaskStoreResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        let matching = tasks
            .values()
            .filter(|task| task.status() == status)
            .cloned()
            .collect();
        Ok(matching)
    }

    fn delete(&self, id: TaskId) -> TaskStoreResult<()> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskStoreError::NotFound(id))
    }
}
