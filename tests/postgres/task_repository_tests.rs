//! `PostgreSQL` repository contract tests.

use super::helpers::{new_task, setup_repository};
use mockable::DefaultClock;
use taskapp::task::{
    domain::{NewTask, TaskDetails, TaskId, TaskStatus, TaskTransition},
    ports::{TaskRepository, TaskRepositoryError},
};

#[tokio::test(flavor = "multi_thread")]
#[ignore = "starts an embedded PostgreSQL cluster"]
async fn stored_task_round_trips_through_the_table() -> eyre::Result<()> {
    let ctx = setup_repository().await?;
    let pending = NewTask::new(
        TaskDetails::new("Write spec").with_detail("Cover the workflow"),
        Some(TaskStatus::Reopened),
        &DefaultClock,
    );

    let stored = ctx.repository.store(&pending).await?;
    let loaded = ctx
        .repository
        .find_by_id(stored.id())
        .await?
        .ok_or_else(|| eyre::eyre!("stored task {} missing", stored.id()))?;

    eyre::ensure!(loaded == stored, "loaded {loaded:?} differs from {stored:?}");
    eyre::ensure!(loaded.detail() == Some("Cover the workflow"));
    eyre::ensure!(loaded.created_at() == pending.created_at());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "starts an embedded PostgreSQL cluster"]
async fn status_filter_and_ordering() -> eyre::Result<()> {
    let ctx = setup_repository().await?;
    let open = ctx.repository.store(&new_task("Open", None)).await?;
    let closed = ctx
        .repository
        .store(&new_task("Closed", Some(TaskStatus::Closed)))
        .await?;
    let reopened = ctx
        .repository
        .store(&new_task("Reopened", Some(TaskStatus::Reopened)))
        .await?;

    let all_ids: Vec<TaskId> = ctx
        .repository
        .find_all()
        .await?
        .iter()
        .map(|task| task.id())
        .collect();
    eyre::ensure!(all_ids == vec![open.id(), closed.id(), reopened.id()]);

    for (status, expected) in [
        (TaskStatus::Open, &open),
        (TaskStatus::Closed, &closed),
        (TaskStatus::Reopened, &reopened),
    ] {
        let matching = ctx.repository.find_by_status(status).await?;
        eyre::ensure!(
            matching.as_slice() == std::slice::from_ref(expected),
            "unexpected tasks for {status}: {matching:?}"
        );
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "starts an embedded PostgreSQL cluster"]
async fn update_overwrites_and_reports_missing_rows() -> eyre::Result<()> {
    let ctx = setup_repository().await?;
    let mut task = ctx.repository.store(&new_task("Draft", None)).await?;

    eyre::ensure!(task.apply(TaskTransition::Close, &DefaultClock));
    task.revise(TaskDetails::new("Final"), None, &DefaultClock);
    ctx.repository.update(&task).await?;

    let loaded = ctx
        .repository
        .find_by_id(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("updated task missing"))?;
    eyre::ensure!(loaded == task, "loaded {loaded:?} differs from {task:?}");

    eyre::ensure!(ctx.repository.delete_by_id(task.id()).await?);
    let result = ctx.repository.update(&task).await;
    eyre::ensure!(
        matches!(result, Err(TaskRepositoryError::NotFound(id)) if id == task.id()),
        "expected NotFound, got {result:?}"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "starts an embedded PostgreSQL cluster"]
async fn delete_of_unknown_id_reports_nothing_removed() -> eyre::Result<()> {
    let ctx = setup_repository().await?;

    eyre::ensure!(!ctx.repository.delete_by_id(TaskId::new(999)).await?);
    eyre::ensure!(ctx.repository.find_by_id(TaskId::new(999)).await?.is_none());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "starts an embedded PostgreSQL cluster"]
async fn long_titles_are_stored_verbatim() -> eyre::Result<()> {
    let ctx = setup_repository().await?;
    let title = "t".repeat(300);

    let stored = ctx.repository.store(&new_task(&title, None)).await?;

    eyre::ensure!(stored.title() == title, "title was truncated or rejected");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "starts an embedded PostgreSQL cluster"]
async fn status_update_leaves_descriptive_columns_alone() -> eyre::Result<()> {
    let ctx = setup_repository().await?;
    let original = ctx.repository.store(&new_task("Draft", None)).await?;

    let mut edited = original.clone();
    edited.revise(TaskDetails::new("Edited"), None, &DefaultClock);
    ctx.repository.update(&edited).await?;

    let mut closing = original;
    eyre::ensure!(closing.apply(TaskTransition::Close, &DefaultClock));
    let stored = ctx.repository.update_status(&closing).await?;

    eyre::ensure!(stored.status() == TaskStatus::Closed);
    eyre::ensure!(stored.title() == "Edited", "title was {}", stored.title());
    eyre::ensure!(stored.updated_at() == closing.updated_at());

    ctx.repository.delete_by_id(stored.id()).await?;
    let result = ctx.repository.update_status(&closing).await;
    eyre::ensure!(
        matches!(result, Err(TaskRepositoryError::NotFound(_))),
        "expected NotFound, got {result:?}"
    );
    Ok(())
}
