//! Shared test helpers for `PostgreSQL` integration tests.

use eyre::WrapErr;
use mockable::DefaultClock;
use postgresql_embedded::PostgreSQL;
use taskapp::task::{
    adapters::postgres::{PostgresTaskRepository, apply_schema, build_pool},
    domain::{NewTask, TaskDetails, TaskStatus},
};
use uuid::Uuid;

/// Pool size used by test repositories.
const TEST_POOL_SIZE: u32 = 2;

/// Running embedded cluster paired with a repository over a fresh database.
///
/// Dropping the context stops the cluster.
pub struct PostgresContext {
    _postgres: PostgreSQL,
    pub repository: PostgresTaskRepository,
}

/// Starts an embedded cluster, creates a uniquely named database and applies
/// the task schema to it.
///
/// # Errors
///
/// Returns an error if the cluster cannot be installed or started, or if the
/// database or schema cannot be created.
pub async fn setup_repository() -> eyre::Result<PostgresContext> {
    let mut postgres = PostgreSQL::default();
    postgres.setup().await.wrap_err("install embedded PostgreSQL")?;
    postgres.start().await.wrap_err("start embedded PostgreSQL")?;

    let database = format!("taskapp_test_{}", Uuid::new_v4().simple());
    postgres
        .create_database(&database)
        .await
        .wrap_err_with(|| format!("create database {database}"))?;
    let url = postgres.settings().url(&database);

    let pool = tokio::task::spawn_blocking(move || {
        let pool = build_pool(&url, TEST_POOL_SIZE)?;
        apply_schema(&pool)?;
        Ok::<_, eyre::Report>(pool)
    })
    .await
    .wrap_err("schema set-up task failed")??;

    Ok(PostgresContext {
        _postgres: postgres,
        repository: PostgresTaskRepository::new(pool),
    })
}

/// Builds an unsaved task with the given title and optional initial status.
pub fn new_task(title: &str, status: Option<TaskStatus>) -> NewTask {
    NewTask::new(TaskDetails::new(title), status, &DefaultClock)
}
