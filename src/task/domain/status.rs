//! Task lifecycle status.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Work has not started.
    Todo,
    /// Work is under way.
    Doing,
    /// Work is finished. A done task may be reopened to `Doing`.
    Done,
}

impl TaskStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::Doing, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Done => "done",
        }
    }

    /// Returns `true` when `value` is exactly one of `todo`, `doing` or
    /// `done`.
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        Self::try_from(value).is_ok()
    }

    /// Returns whether a task in this status may move to `target`.
    ///
    /// `Done -> Todo` is the only forbidden edge; every other pair, including
    /// a status to itself, is allowed.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        !matches!((self, target), (Self::Done, Self::Todo))
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "todo" => Ok(Self::Todo),
            "doing" => Ok(Self::Doing),
            "done" => Ok(Self::Done),
            _ => Err(TaskDomainError::InvalidStatus(value.to_owned())),
        }
    }
}
