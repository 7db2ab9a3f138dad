//! Task aggregate root and the unsaved task record handed to stores.

use super::{TaskId, TaskStatus, TaskTransition};
use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;
use serde::Serialize;

/// Descriptive, caller-supplied task fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskDetails {
    /// Short task title.
    pub title: String,
    /// Optional longer description.
    pub detail: Option<String>,
}

impl TaskDetails {
    /// Creates details with a title and no description.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Task that has not been persisted yet and therefore has no identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    details: TaskDetails,
    status: TaskStatus,
    created_at: DateTime<Utc>,
}

impl NewTask {
    /// Prepares a task for insertion, defaulting the status to
    /// [`TaskStatus::Open`].
    #[must_use]
    pub fn new(details: TaskDetails, status: Option<TaskStatus>, clock: &impl Clock) -> Self {
        Self {
            details,
            status: status.unwrap_or(TaskStatus::Open),
            created_at: now(clock),
        }
    }

    /// Returns the descriptive fields.
    #[must_use]
    pub const fn details(&self) -> &TaskDetails {
        &self.details
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Attaches the store-assigned identifier.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            details: self.details,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    #[serde(flatten)]
    details: TaskDetails,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted descriptive fields.
    pub details: TaskDetails,
    /// Persisted workflow status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            details: data.details,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the descriptive fields.
    #[must_use]
    pub const fn details(&self) -> &TaskDetails {
        &self.details
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.details.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.details.detail.as_deref()
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a workflow transition.
    ///
    /// Returns `false` and leaves the task untouched when the current status
    /// does not permit the transition; illegal transitions are ignored rather
    /// than reported.
    pub fn apply(&mut self, transition: TaskTransition, clock: &impl Clock) -> bool {
        if !self.status.permits(transition) {
            return false;
        }
        self.status = transition.target();
        self.touch(clock);
        true
    }

    /// Overwrites the descriptive fields and, when supplied, the status.
    ///
    /// Status changes made here bypass the transition graph.
    pub fn revise(&mut self, details: TaskDetails, status: Option<TaskStatus>, clock: &impl Clock) {
        self.details = details;
        if let Some(new_status) = status {
            self.status = new_status;
        }
        self.touch(clock);
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = now(clock);
    }
}

/// Reads the clock at the microsecond precision `PostgreSQL` stores.
fn now(clock: &impl Clock) -> DateTime<Utc> {
    clock.utc().trunc_subsecs(6)
}
