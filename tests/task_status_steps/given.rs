//! Given steps for task status BDD scenarios.

use super::world::TaskStatusWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::services::CreateTaskRequest;

#[given(r#"a task titled "{title}" with description "{description}" has been created"#)]
fn task_has_been_created(
    world: &mut TaskStatusWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    let created = world
        .service
        .create_task(CreateTaskRequest::new(title).with_description(description))
        .wrap_err("create task for scenario")?;
    world.last_created_task = Some(created);
    Ok(())
}

#[given(r#"the task status has been updated to "{status}""#)]
fn task_status_has_been_updated(
    world: &mut TaskStatusWorld,
    status: String,
) -> Result<(), eyre::Report> {
    let id = world.created_task()?.id.to_string();
    world
        .service
        .update_task_status(&id, &status)
        .wrap_err("update task status in scenario setup")?;
    Ok(())
}
