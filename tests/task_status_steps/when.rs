//! When steps for task status BDD scenarios.

use super::world::TaskStatusWorld;
use rstest_bdd_macros::when;

#[when(r#"the task status is updated to "{status}""#)]
fn update_task_status(world: &mut TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let id = world.created_task()?.id.to_string();
    world.last_update_result = Some(world.service.update_task_status(&id, &status));
    Ok(())
}

#[when("the task is deleted")]
fn delete_task(world: &mut TaskStatusWorld) -> Result<(), eyre::Report> {
    let id = world.created_task()?.id.to_string();
    world.last_delete_result = Some(world.service.delete_task(&id));
    Ok(())
}
