//! Error types for task domain validation and parsing.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty.
    #[error("title cannot be empty")]
    EmptyTitle,

    /// The status value is not one of `todo`, `doing` or `done`.
    #[error("invalid status '{0}', expected todo, doing or done")]
    InvalidStatus(String),

    /// The requested status change is forbidden by the lifecycle rules.
    #[error("task {task_id} cannot change status from {from} to {to}")]
    InvalidTransition {
        /// Task whose transition was rejected.
        task_id: TaskId,
        /// Status held by the task when the transition was attempted.
        from: TaskStatus,
        /// Status that was requested.
        to: TaskStatus,
    },

    /// The identifier is empty or not a canonical UUID.
    #[error("invalid task id '{0}'")]
    InvalidIdentifier(String),
}
