//! Domain model for personal task management.
//!
//! The task domain models identity, status lifecycle and the task aggregate
//! while keeping all infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod status;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use status::TaskStatus;
pub use task::Task;
