//! HTTP adapter for the task workflow.
//!
//! Translates requests on the dashboard, filter, transition and CRUD routes
//! into [`TaskWorkflowService`] calls and renders the results. Unrecognized
//! status keys and transition actions are ignored rather than reported.
//!
//! [`TaskWorkflowService`]: crate::task::services::TaskWorkflowService

mod error;
mod forms;
mod handlers;
mod routes;
mod templates;

pub use error::{WebError, WebResult};
pub use forms::{CreateTaskForm, UpdateTaskForm};
pub use routes::{AppState, SharedWorkflow, router};
pub use templates::{DashboardTemplates, TaskView};
