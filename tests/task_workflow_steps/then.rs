//! Then steps for task workflow BDD scenarios.

use super::world::{TaskWorkflowWorld, parse_status, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskWorkflowWorld, status: String) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let id = world.current()?.id();
    let stored = run_async(world.service.find_by_id(id)).wrap_err("reload scenario task")?;

    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            stored.status()
        ));
    }
    Ok(())
}

#[then("the task has not been modified")]
fn task_not_modified(world: &TaskWorkflowWorld) -> Result<(), eyre::Report> {
    let task = world.current()?;
    if task.updated_at() != task.created_at() {
        return Err(eyre::eyre!(
            "expected untouched task, updated at {} after creation at {}",
            task.updated_at(),
            task.created_at()
        ));
    }
    Ok(())
}

#[then("the lookup fails because the task was not found")]
fn lookup_not_found(world: &TaskWorkflowWorld) -> Result<(), eyre::Report> {
    let result = world
        .lookup_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing lookup result"))?;

    match result {
        Err(err) if err.is_not_found() => Ok(()),
        other => Err(eyre::eyre!("expected NotFound error, got {other:?}")),
    }
}

#[then(r#"the listed titles are "{titles}""#)]
fn listed_titles_are(world: &TaskWorkflowWorld, titles: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = titles.split(", ").collect();
    let actual: Vec<&str> = world.listed.iter().map(|task| task.title()).collect();

    if actual != expected {
        return Err(eyre::eyre!("expected titles {expected:?}, found {actual:?}"));
    }
    Ok(())
}
