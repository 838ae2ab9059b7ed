//! Store port for task persistence and lookup.

use crate::task::domain::{Task, TaskId, TaskStatus};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
///
/// Implementations own the canonical copy of every task. Reads hand out
/// independent clones, so callers can only change stored state through
/// [`TaskStore::save`].
#[cfg_attr(test, mockall::automock)]
pub trait TaskStore: Send + Sync {
    /// Inserts the task or replaces the stored task with the same identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] only when the backing storage
    /// is unusable.
    fn save(&self, task: &Task) -> TaskStoreResult<()>;

    /// Finds a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has the identifier.
    fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Task>;

    /// Returns every stored task whose status equals `status`.
    ///
    /// Ordering is unspecified. An empty vector is returned when nothing
    /// matches.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] only when the backing storage
    /// is unusable.
    fn find_by_status(&self, status: TaskStatus) -> TaskStoreResult<Vec<Task>>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has the identifier;
    /// the store is left unchanged.
    fn delete(&self, id: TaskId) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
