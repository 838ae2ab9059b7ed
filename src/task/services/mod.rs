//! Application services for task orchestration.

mod lifecycle;
mod response;

pub use lifecycle::{CreateTaskRequest, TaskService, TaskServiceError, TaskServiceResult};
pub use response::TaskResponse;
