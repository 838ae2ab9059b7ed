//! HTTP transport for task use cases.
//!
//! | Method | Path                 | Success                  |
//! |--------|----------------------|--------------------------|
//! | POST   | `/tasks`             | 200 with the new task    |
//! | GET    | `/tasks?status=<s>`  | 200 with matching tasks  |
//! | PUT    | `/tasks/{id}/status` | 204                      |
//! | DELETE | `/tasks/{id}`        | 204                      |
//!
//! Failures, including extractor rejections, carry a `{"error": "<message>"}`
//! body. Only the first `status` query value is used.

mod error;
mod handlers;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, post, put},
};
use mockable::Clock;
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ErrorBody};
pub use handlers::{
    CreateTaskBody, QueryPairs, STATUS_PARAM, SharedService, UpdateStatusBody, create_task,
    delete_task, list_tasks, update_task_status,
};

use crate::task::{ports::TaskStore, services::TaskService};

/// Builds the task API router around a service.
pub fn router<S, C>(service: TaskService<S, C>) -> Router
where
    S: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    let state: SharedService<S, C> = Arc::new(service);
    Router::new()
        .route("/tasks", post(create_task::<S, C>).get(list_tasks::<S, C>))
        .route("/tasks/{id}", delete(delete_task::<S, C>))
        .route("/tasks/{id}/status", put(update_task_status::<S, C>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
