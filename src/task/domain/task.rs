//! Task aggregate root.

use super::{TaskDomainError, TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Task aggregate root.
///
/// Identity, title, description and creation time are fixed at construction.
/// Status only changes through [`Task::transition_to`] or
/// [`Task::transition_status`], which enforce the lifecycle rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: TaskStatus,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in the `Todo` status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when `title` is empty.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let owned_title: String = title.into();
        if owned_title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        Ok(Self {
            id: TaskId::new(),
            title: owned_title,
            description: description.into(),
            status: TaskStatus::Todo,
            created_at: clock.utc(),
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Moves the task to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] when the lifecycle rules
    /// forbid the change. The task is left untouched in that case.
    pub fn transition_to(&mut self, target: TaskStatus) -> Result<(), TaskDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(TaskDomainError::InvalidTransition {
                task_id: self.id,
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        Ok(())
    }

    /// Returns a copy of this task moved to the status named by `new_status`.
    ///
    /// The status string is validated before the transition rule, so an
    /// unknown status is reported as such whatever the current status is.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatus`] for an unknown status and
    /// [`TaskDomainError::InvalidTransition`] for a forbidden change.
    pub fn transition_status(&self, new_status: &str) -> Result<Self, TaskDomainError> {
        let target = TaskStatus::try_from(new_status)?;
        let mut next = self.clone();
        next.transition_to(target)?;
        Ok(next)
    }
}
