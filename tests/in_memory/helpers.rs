//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskapp::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTask, TaskDetails, TaskStatus},
    services::TaskWorkflowService,
};

/// Workflow service backed by the in-memory repository.
pub type TestService = TaskWorkflowService<InMemoryTaskRepository, DefaultClock>;

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

/// Provides a workflow service over a fresh repository.
#[fixture]
pub fn service() -> TestService {
    TaskWorkflowService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Builds an unsaved task with the given title and status.
#[must_use]
pub fn new_task(title: &str, status: Option<TaskStatus>) -> NewTask {
    NewTask::new(TaskDetails::new(title), status, &DefaultClock)
}
