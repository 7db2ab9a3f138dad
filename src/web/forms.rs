//! Explicit form inputs for the create and update routes.
//!
//! Forms are deserialized as submitted and then mapped onto service requests:
//! titles are trimmed, blank details are dropped and unrecognized statuses are
//! treated as absent.

use serde::Deserialize;

use crate::task::{
    domain::{TaskId, TaskStatus},
    services::{CreateTaskRequest, UpdateTaskRequest},
};

/// Fields submitted by the create-task form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateTaskForm {
    /// Task title.
    #[serde(default)]
    pub title: String,
    /// Optional task description.
    #[serde(default)]
    pub detail: Option<String>,
    /// Optional initial status query key.
    #[serde(default)]
    pub status: Option<String>,
}

impl CreateTaskForm {
    /// Maps the form onto a workflow create request.
    #[must_use]
    pub fn into_request(self) -> CreateTaskRequest {
        let mut request = CreateTaskRequest::new(self.title.trim());
        if let Some(detail) = non_blank(self.detail) {
            request = request.with_detail(detail);
        }
        if let Some(status) = parse_status(self.status.as_deref()) {
            request = request.with_status(status);
        }
        request
    }
}

/// Fields submitted by the edit-task form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateTaskForm {
    /// Identifier of the task being edited.
    pub id: i64,
    /// Replacement title.
    #[serde(default)]
    pub title: String,
    /// Replacement description.
    #[serde(default)]
    pub detail: Option<String>,
    /// Optional replacement status query key.
    #[serde(default)]
    pub status: Option<String>,
}

impl UpdateTaskForm {
    /// Maps the form onto a workflow update request.
    #[must_use]
    pub fn into_request(self) -> UpdateTaskRequest {
        let mut request = UpdateTaskRequest::new(TaskId::new(self.id), self.title.trim());
        if let Some(detail) = non_blank(self.detail) {
            request = request.with_detail(detail);
        }
        if let Some(status) = parse_status(self.status.as_deref()) {
            request = request.with_status(status);
        }
        request
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

fn parse_status(value: Option<&str>) -> Option<TaskStatus> {
    value.and_then(|raw| TaskStatus::try_from(raw).ok())
}
