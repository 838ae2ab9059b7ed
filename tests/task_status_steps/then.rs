//! Then steps for task status BDD scenarios.

use super::world::TaskStatusWorld;
use rstest_bdd_macros::then;
use taskboard::task::{
    domain::{TaskDomainError, TaskStatus},
    ports::{TaskStore, TaskStoreError},
    services::TaskServiceError,
};

fn parse_status(raw: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(raw).map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let task = world.created_task()?;

    if task.status != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            task.status
        ));
    }
    Ok(())
}

#[then(r#"the stored task status is "{status}""#)]
fn stored_task_status_is(world: &TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let id = world.created_task()?.id;
    let stored = world.store.find_by_id(id)?;

    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected stored status {expected}, found {}",
            stored.status()
        ));
    }
    Ok(())
}

#[then("the update fails with an invalid transition error")]
fn update_fails_with_invalid_transition(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_update_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing update result"))?;

    if !matches!(
        result,
        Err(TaskServiceError::Domain(
            TaskDomainError::InvalidTransition { .. }
        ))
    ) {
        return Err(eyre::eyre!(
            "expected InvalidTransition error, got {result:?}"
        ));
    }
    Ok(())
}

#[then("the update fails with an invalid status error")]
fn update_fails_with_invalid_status(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_update_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing update result"))?;

    if !matches!(
        result,
        Err(TaskServiceError::Domain(TaskDomainError::InvalidStatus(_)))
    ) {
        return Err(eyre::eyre!("expected InvalidStatus error, got {result:?}"));
    }
    Ok(())
}

#[then("fetching the task fails with not found")]
fn fetching_fails_with_not_found(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let delete_result = world
        .last_delete_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing delete result"))?;
    if let Err(err) = delete_result {
        return Err(eyre::eyre!("delete failed: {err}"));
    }

    let id = world.created_task()?.id;
    match world.store.find_by_id(id) {
        Err(TaskStoreError::NotFound(missing)) if missing == id => Ok(()),
        other => Err(eyre::eyre!("expected NotFound, got {other:?}")),
    }
}
