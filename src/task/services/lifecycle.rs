//! Service layer for task creation, status changes, lookup and deletion.

use crate::task::{
    domain::{Task, TaskDomainError, TaskId, TaskStatus},
    ports::{TaskStore, TaskStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use super::TaskResponse;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
}

impl CreateTaskRequest {
    /// Creates a request with the given title and an empty description.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
    /// The caller-supplied identifier could not be parsed.
    #[error("invalid id '{0}'")]
    InvalidId(String),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// The only caller of the store. Update is a fetch, transition and save
/// sequence with no lock held in between, so two concurrent updates of the
/// same task can overwrite each other; the last save wins.
pub struct TaskService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> Clone for TaskService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S, C> TaskService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Creates and persists a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] with
    /// [`TaskDomainError::EmptyTitle`] for an empty title, or
    /// [`TaskServiceError::Store`] when persistence fails.
    pub fn create_task(&self, request: CreateTaskRequest) -> TaskServiceResult<TaskResponse> {
        let CreateTaskRequest { title, description } = request;
        let task = Task::new(title, description, &*self.clock)?;
        self.store.save(&task)?;
        debug!(task_id = %task.id(), "task created");
        Ok(TaskResponse::from(task))
    }

    /// Moves an existing task to a new status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidId`] for a malformed identifier,
    /// [`TaskStoreError::NotFound`] (wrapped in [`TaskServiceError::Store`])
    /// for an unknown task, and [`TaskDomainError::InvalidStatus`] or
    /// [`TaskDomainError::InvalidTransition`] (wrapped in
    /// [`TaskServiceError::Domain`]) when the status change is rejected.
    pub fn update_task_status(&self, id: &str, status: &str) -> TaskServiceResult<TaskResponse> {
        let task_id = parse_id(id)?;
        let current = self.store.find_by_id(task_id)?;
        let updated = current.transition_status(status)?;
        self.store.save(&updated)?;
        debug!(
            task_id = %task_id,
            from = %current.status(),
            to = %updated.status(),
            "task status updated"
        );
        Ok(TaskResponse::from(updated))
    }

    /// Returns every task currently in the given status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatus`] (wrapped in
    /// [`TaskServiceError::Domain`]) for an unknown status, or
    /// [`TaskServiceError::Store`] when the lookup fails.
    pub fn get_tasks_by_status(&self, status: &str) -> TaskServiceResult<Vec<TaskResponse>> {
        let wanted = TaskStatus::try_from(status)?;
        let tasks = self.store.find_by_status(wanted)?;
        debug!(status = %wanted, count = tasks.len(), "tasks listed by status");
        Ok(tasks.iter().map(TaskResponse::from).collect())
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidId`] for a malformed identifier, or
    /// [`TaskStoreError::NotFound`] (wrapped in [`TaskServiceError::Store`])
    /// for an unknown task.
    pub fn delete_task(&self, id: &str) -> TaskServiceResult<()> {
        let task_id = parse_id(id)?;
        self.store.delete(task_id)?;
        debug!(%task_id, "task deleted");
        Ok(())
    }
}

fn parse_id(raw: &str) -> TaskServiceResult<TaskId> {
    TaskId::parse(raw).map_err(|_| TaskServiceError::InvalidId(raw.to_owned()))
}
