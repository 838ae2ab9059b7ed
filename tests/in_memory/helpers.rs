//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskStore,
    services::{CreateTaskRequest, TaskResponse, TaskService},
};

/// Service type used across in-memory tests.
pub type TestService = TaskService<InMemoryTaskStore, DefaultClock>;

/// Builds a service over a store the caller keeps a handle to.
pub fn service_over(store: &InMemoryTaskStore) -> TestService {
    TaskService::new(Arc::new(store.clone()), Arc::new(DefaultClock))
}

/// Fresh service over an empty store.
#[fixture]
pub fn service() -> TestService {
    service_over(&InMemoryTaskStore::new())
}

/// Creates a task with the given title.
///
/// # Errors
///
/// Returns an error when the service rejects the request.
pub fn create(service: &TestService, title: &str) -> eyre::Result<TaskResponse> {
    Ok(service.create_task(CreateTaskRequest::new(title))?)
}
