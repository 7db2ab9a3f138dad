//! Router construction and shared handler state.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use mockable::DefaultClock;
use tower_http::trace::TraceLayer;

use super::{handlers, templates::DashboardTemplates};
use crate::task::{ports::TaskRepository, services::TaskWorkflowService};

/// Workflow service type shared by all handlers, independent of the store
/// backing it.
pub type SharedWorkflow = TaskWorkflowService<dyn TaskRepository, DefaultClock>;

/// State shared by request handlers.
#[derive(Clone)]
pub struct AppState {
    pub(super) workflow: Arc<SharedWorkflow>,
    pub(super) templates: Arc<DashboardTemplates>,
}

impl AppState {
    /// Creates handler state around a workflow service.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when the dashboard template fails to
    /// compile.
    pub fn new(workflow: Arc<SharedWorkflow>) -> Result<Self, minijinja::Error> {
        Ok(Self {
            workflow,
            templates: Arc::new(DashboardTemplates::new()?),
        })
    }
}

/// Builds the application router.
///
/// Static segments win over the `{status}` and `{action}` captures, so
/// `/tasks`, `/health` and `/task/{id}/delete` are never treated as filters
/// or transitions.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/tasks", get(handlers::dashboard))
        .route("/health", get(handlers::health))
        .route("/update", post(handlers::update_task))
        .route("/task/create", post(handlers::create_task))
        .route("/task/{id}/delete", get(handlers::delete_task))
        .route("/task/{id}/{action}", get(handlers::transition_task))
        .route("/findTask/{id}", get(handlers::find_task))
        .route("/{status}", get(handlers::tasks_by_status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
