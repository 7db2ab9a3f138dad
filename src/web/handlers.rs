//! Request handlers for the task routes.

use axum::{
    Form, Json,
    extract::{Path, State},
    http::{HeaderMap, header},
    response::{Html, Redirect},
};
use serde_json::{Value, json};
use tracing::debug;

use super::{
    error::WebResult,
    forms::{CreateTaskForm, UpdateTaskForm},
    routes::AppState,
};
use crate::task::domain::{Task, TaskId, TaskStatus, TaskTransition};

/// GET `/` and `/tasks`.
pub(super) async fn dashboard(State(state): State<AppState>) -> WebResult<Html<String>> {
    let tasks = state.workflow.list_all().await?;
    Ok(Html(state.templates.render_dashboard(Some(&tasks), None)?))
}

/// GET `/{status}`.
pub(super) async fn tasks_by_status(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> WebResult<Html<String>> {
    let selected = TaskStatus::from_query_key(&key);
    let tasks = match selected {
        Some(status) => Some(state.workflow.list_by_status(status).await?),
        None => {
            debug!(status = %key, "unrecognized status filter ignored");
            None
        }
    };
    Ok(Html(
        state.templates.render_dashboard(tasks.as_deref(), selected)?,
    ))
}

/// GET `/task/{id}/{action}`.
pub(super) async fn transition_task(
    State(state): State<AppState>,
    Path((id, action)): Path<(i64, String)>,
    headers: HeaderMap,
) -> WebResult<Redirect> {
    let task_id = TaskId::new(id);
    match TaskTransition::from_action(&action) {
        Some(transition) => {
            state.workflow.transition(task_id, transition).await?;
        }
        None => {
            state.workflow.find_by_id(task_id).await?;
            debug!(task_id = %task_id, %action, "unrecognized task action ignored");
        }
    }
    Ok(Redirect::to(referer_or_root(&headers)))
}

/// POST `/task/create`.
pub(super) async fn create_task(
    State(state): State<AppState>,
    Form(form): Form<CreateTaskForm>,
) -> WebResult<Redirect> {
    state.workflow.create(form.into_request()).await?;
    Ok(Redirect::to("/"))
}

/// POST `/update`.
pub(super) async fn update_task(
    State(state): State<AppState>,
    Form(form): Form<UpdateTaskForm>,
) -> WebResult<Redirect> {
    state.workflow.update(form.into_request()).await?;
    Ok(Redirect::to("/"))
}

/// GET `/findTask/{id}`.
pub(super) async fn find_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> WebResult<Json<Task>> {
    let task = state.workflow.find_by_id(TaskId::new(id)).await?;
    Ok(Json(task))
}

/// GET `/task/{id}/delete`.
pub(super) async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> WebResult<Redirect> {
    state.workflow.delete(TaskId::new(id)).await?;
    Ok(Redirect::to("/"))
}

/// GET `/health`.
pub(super) async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn referer_or_root(headers: &HeaderMap) -> &str {
    headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .unwrap_or("/")
}
