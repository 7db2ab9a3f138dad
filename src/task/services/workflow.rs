//! Service layer for the task workflow: status transitions, status-filtered
//! queries and CRUD orchestration.

use crate::task::{
    domain::{NewTask, Task, TaskDetails, TaskId, TaskStatus, TaskTransition},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    details: TaskDetails,
    status: Option<TaskStatus>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            details: TaskDetails::new(title),
            status: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.detail = Some(detail.into());
        self
    }

    /// Sets an explicit initial status instead of [`TaskStatus::Open`].
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Request payload for overwriting a task's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    id: TaskId,
    details: TaskDetails,
    status: Option<TaskStatus>,
}

impl UpdateTaskRequest {
    /// Creates a request replacing the title of task `id`.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            details: TaskDetails::new(title),
            status: None,
        }
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.detail = Some(detail.into());
        self
    }

    /// Sets the replacement status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns the identifier of the task to update.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }
}

/// Service-level errors for task workflow operations.
#[derive(Debug, Error)]
pub enum TaskWorkflowError {
    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskWorkflowError {
    /// Returns whether the error reports a missing task.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::Repository(TaskRepositoryError::NotFound(_))
        )
    }
}

/// Result type for task workflow service operations.
pub type TaskWorkflowResult<T> = Result<T, TaskWorkflowError>;

/// Task workflow orchestration service.
///
/// Holds no task state of its own: every call reads and writes through the
/// repository.
pub struct TaskWorkflowService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskWorkflowService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task workflow service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Lists every task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::Repository`] when the lookup fails.
    pub async fn list_all(&self) -> TaskWorkflowResult<Vec<Task>> {
        let tasks = self.repository.find_all().await?;
        debug!(count = tasks.len(), "listed all tasks");
        Ok(tasks)
    }

    /// Lists the tasks currently holding `status`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::Repository`] when the lookup fails.
    pub async fn list_by_status(&self, status: TaskStatus) -> TaskWorkflowResult<Vec<Task>> {
        let tasks = self.repository.find_by_status(status).await?;
        debug!(%status, count = tasks.len(), "listed tasks by status");
        Ok(tasks)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::NotFound`] when no task has the
    /// identifier, or [`TaskWorkflowError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, id: TaskId) -> TaskWorkflowResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskWorkflowError::NotFound(id))
    }

    /// Creates and persists a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::Repository`] when the repository rejects
    /// persistence.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskWorkflowResult<Task> {
        let new_task = NewTask::new(request.details, request.status, &*self.clock);
        let task = self.repository.store(&new_task).await?;
        info!(task_id = %task.id(), status = %task.status(), "task created");
        Ok(task)
    }

    /// Overwrites the mutable fields of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::NotFound`] when the task does not exist, or
    /// [`TaskWorkflowError::Repository`] when persistence fails.
    pub async fn update(&self, request: UpdateTaskRequest) -> TaskWorkflowResult<Task> {
        let mut task = self.find_by_id(request.id).await?;
        task.revise(request.details, request.status, &*self.clock);
        self.persist(&task).await?;
        info!(task_id = %task.id(), status = %task.status(), "task updated");
        Ok(task)
    }

    /// Deletes a task. Deleting an unknown identifier is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::Repository`] when the delete fails.
    pub async fn delete(&self, id: TaskId) -> TaskWorkflowResult<()> {
        if self.repository.delete_by_id(id).await? {
            info!(task_id = %id, "task deleted");
        } else {
            debug!(task_id = %id, "delete ignored for unknown task");
        }
        Ok(())
    }

    /// Closes an open or reopened task. Closing a closed task is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::NotFound`] when the task does not exist, or
    /// [`TaskWorkflowError::Repository`] when persistence fails.
    pub async fn close(&self, id: TaskId) -> TaskWorkflowResult<Task> {
        self.transition(id, TaskTransition::Close).await
    }

    /// Reopens a closed task. Reopening any other task is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::NotFound`] when the task does not exist, or
    /// [`TaskWorkflowError::Repository`] when persistence fails.
    pub async fn reopen(&self, id: TaskId) -> TaskWorkflowResult<Task> {
        self.transition(id, TaskTransition::Reopen).await
    }

    /// Applies `transition` to a task when its current status permits it.
    ///
    /// Only the status and modification timestamp are written, and only when
    /// the status changes, so a concurrent edit of the descriptive fields is
    /// kept. The returned task reflects the stored state either way.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::NotFound`] when the task does not exist, or
    /// [`TaskWorkflowError::Repository`] when persistence fails.
    pub async fn transition(
        &self,
        id: TaskId,
        transition: TaskTransition,
    ) -> TaskWorkflowResult<Task> {
        let mut task = self.find_by_id(id).await?;
        let from = task.status();
        if !task.apply(transition, &*self.clock) {
            debug!(task_id = %id, status = %from, %transition, "transition ignored");
            return Ok(task);
        }

        let stored = self
            .repository
            .update_status(&task)
            .await
            .map_err(not_found_or_repository)?;
        info!(task_id = %id, %from, to = %stored.status(), "task transitioned");
        Ok(stored)
    }

    async fn persist(&self, task: &Task) -> TaskWorkflowResult<()> {
        self.repository
            .update(task)
            .await
            .map_err(not_found_or_repository)
    }
}

fn not_found_or_repository(err: TaskRepositoryError) -> TaskWorkflowError {
    match err {
        TaskRepositoryError::NotFound(id) => TaskWorkflowError::NotFound(id),
        other => TaskWorkflowError::Repository(other),
    }
}
