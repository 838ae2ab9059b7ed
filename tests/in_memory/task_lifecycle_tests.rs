//! In-memory integration tests for the task lifecycle.

use std::collections::HashSet;

use rstest::rstest;
use taskboard::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{TaskDomainError, TaskStatus},
    ports::{TaskStore, TaskStoreError},
    services::{CreateTaskRequest, TaskServiceError},
};

use super::helpers::{TestService, create, service, service_over};

#[rstest]
fn full_lifecycle_enforces_done_to_todo_rule(service: TestService) -> eyre::Result<()> {
    let created = service.create_task(CreateTaskRequest::new("abc").with_description("desc"))?;
    eyre::ensure!(created.status == TaskStatus::Todo);
    let id = created.id.to_string();

    service.update_task_status(&id, "doing")?;
    let doing = service.get_tasks_by_status("doing")?;
    eyre::ensure!(doing.iter().any(|task| task.id == created.id));

    service.update_task_status(&id, "done")?;
    let rejected = service.update_task_status(&id, "todo");
    eyre::ensure!(
        matches!(
            rejected,
            Err(TaskServiceError::Domain(
                TaskDomainError::InvalidTransition { .. }
            ))
        ),
        "expected InvalidTransition, got {rejected:?}"
    );
    let done = service.get_tasks_by_status("done")?;
    eyre::ensure!(done.iter().any(|task| task.id == created.id));

    service.delete_task(&id)?;
    let after_delete = service.update_task_status(&id, "doing");
    eyre::ensure!(
        matches!(
            after_delete,
            Err(TaskServiceError::Store(TaskStoreError::NotFound(_)))
        ),
        "expected NotFound, got {after_delete:?}"
    );
    Ok(())
}

#[rstest]
fn done_task_can_be_reopened(service: TestService) -> eyre::Result<()> {
    let created = create(&service, "Reopen")?;
    let id = created.id.to_string();

    service.update_task_status(&id, "done")?;
    let reopened = service.update_task_status(&id, "doing")?;

    eyre::ensure!(reopened.status == TaskStatus::Doing);
    Ok(())
}

#[rstest]
fn listing_partitions_tasks_by_status(service: TestService) -> eyre::Result<()> {
    let a = create(&service, "a")?;
    let b = create(&service, "b")?;
    let c = create(&service, "c")?;
    service.update_task_status(&b.id.to_string(), "doing")?;
    service.update_task_status(&c.id.to_string(), "done")?;

    let ids = |status: &str| -> eyre::Result<HashSet<_>> {
        Ok(service
            .get_tasks_by_status(status)?
            .into_iter()
            .map(|task| task.id)
            .collect())
    };

    eyre::ensure!(ids("todo")? == HashSet::from([a.id]));
    eyre::ensure!(ids("doing")? == HashSet::from([b.id]));
    eyre::ensure!(ids("done")? == HashSet::from([c.id]));
    Ok(())
}

#[rstest]
fn service_and_store_share_state() -> eyre::Result<()> {
    let store = InMemoryTaskStore::new();
    let service = service_over(&store);

    let created = create(&service, "Shared state")?;
    eyre::ensure!(store.find_by_id(created.id)?.title() == "Shared state");
    service.delete_task(&created.id.to_string())?;
    eyre::ensure!(store.is_empty()?);
    Ok(())
}

#[rstest]
fn deleting_twice_reports_not_found(service: TestService) -> eyre::Result<()> {
    let created = create(&service, "Delete twice")?;
    let id = created.id.to_string();

    service.delete_task(&id)?;
    let second = service.delete_task(&id);

    eyre::ensure!(matches!(
        second,
        Err(TaskServiceError::Store(TaskStoreError::NotFound(_)))
    ));
    Ok(())
}
