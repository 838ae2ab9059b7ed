//! Axum handlers translating HTTP requests into task use-case calls.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use mockable::Clock;
use serde::Deserialize;

use super::ApiError;
use crate::task::{
    ports::TaskStore,
    services::{CreateTaskRequest, TaskResponse, TaskService},
};

/// Shared handler state.
pub type SharedService<S, C> = Arc<TaskService<S, C>>;

/// JSON payload for `POST /tasks`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskBody {
    /// Task title.
    pub title: String,
    /// Task description.
    #[serde(default)]
    pub description: String,
}

/// JSON payload for `PUT /tasks/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusBody {
    /// Requested status.
    #[serde(rename = "newStatus")]
    pub new_status: String,
}

/// Raw query pairs for `GET /tasks`, in request order.
pub type QueryPairs = Vec<(String, String)>;

/// Name of the query parameter selecting the status to list.
pub const STATUS_PARAM: &str = "status";

/// Returns the first `status` value unless it is empty; later repeats are
/// ignored.
fn first_status(pairs: QueryPairs) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, _)| key == STATUS_PARAM)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

fn path_id(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}

/// Handles `POST /tasks`.
///
/// # Errors
///
/// Returns 400 for a malformed body or an empty title.
pub async fn create_task<S, C>(
    State(service): State<SharedService<S, C>>,
    payload: Result<Json<CreateTaskBody>, JsonRejection>,
) -> Result<Json<TaskResponse>, ApiError>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    let Json(body) = payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let request = CreateTaskRequest::new(body.title).with_description(body.description);
    let created = service.create_task(request)?;
    Ok(Json(created))
}

/// Handles `GET /tasks?status=<status>`.
///
/// # Errors
///
/// Returns 400 when the query string is malformed or the status is missing
/// or unknown.
pub async fn list_tasks<S, C>(
    State(service): State<SharedService<S, C>>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<Vec<TaskResponse>>, ApiError>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    let Query(pairs) = query.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let status = first_status(pairs)
        .ok_or_else(|| ApiError::bad_request("status query param required"))?;
    let tasks = service.get_tasks_by_status(&status)?;
    Ok(Json(tasks))
}

/// Handles `PUT /tasks/{id}/status`.
///
/// # Errors
///
/// Returns 400 for a malformed id, body or status, or a forbidden
/// transition, and 404 for an unknown task.
pub async fn update_task_status<S, C>(
    State(service): State<SharedService<S, C>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateStatusBody>, JsonRejection>,
) -> Result<StatusCode, ApiError>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    let id = path_id(path)?;
    let Json(body) = payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    service.update_task_status(&id, &body.new_status)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handles `DELETE /tasks/{id}`.
///
/// # Errors
///
/// Returns 400 for an undecodable or malformed id and 404 for an unknown task.
pub async fn delete_task<S, C>(
    State(service): State<SharedService<S, C>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    let id = path_id(path)?;
    service.delete_task(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
