//! Identifier type for the task domain.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a task.
///
/// The textual form is always the canonical lowercase hyphenated UUID, both
/// for generated values and for values accepted by [`TaskId::parse`].
/// Deserialisation goes through [`TaskId::parse`] as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a task identifier from its canonical textual form.
    ///
    /// No normalisation is applied: uppercase, braced, URN and unhyphenated
    /// spellings are rejected even though they denote a valid UUID.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidIdentifier`] when the value is empty,
    /// malformed or not in canonical form.
    pub fn parse(value: &str) -> Result<Self, TaskDomainError> {
        if value.is_empty() {
            return Err(TaskDomainError::InvalidIdentifier(String::new()));
        }
        let uuid = Uuid::try_parse(value)
            .map_err(|_| TaskDomainError::InvalidIdentifier(value.to_owned()))?;
        let mut buffer = Uuid::encode_buffer();
        let canonical: &str = uuid.hyphenated().encode_lower(&mut buffer);
        if canonical != value {
            return Err(TaskDomainError::InvalidIdentifier(value.to_owned()));
        }
        Ok(Self(uuid))
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for TaskId {
    type Err = TaskDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TaskId {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TaskId> for String {
    fn from(id: TaskId) -> Self {
        id.to_string()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
