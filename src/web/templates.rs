//! Server-side rendering of the task dashboard.

use minijinja::{Environment, context};
use serde::Serialize;

use crate::task::domain::{Task, TaskStatus, TaskTransition};

const DASHBOARD_NAME: &str = "index.html";
const DASHBOARD_SOURCE: &str = include_str!("../../templates/index.html");

/// Presentation model of a task row on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView<'a> {
    /// Task identifier.
    pub id: i64,
    /// Task title.
    pub title: &'a str,
    /// Optional task description.
    pub detail: Option<&'a str>,
    /// Status query key.
    pub status: &'static str,
    /// Transition action names available from the current status.
    pub actions: Vec<&'static str>,
}

impl<'a> From<&'a Task> for TaskView<'a> {
    fn from(task: &'a Task) -> Self {
        Self {
            id: task.id().value(),
            title: task.title(),
            detail: task.detail(),
            status: task.status().query_key(),
            actions: task
                .status()
                .available_transitions()
                .into_iter()
                .map(TaskTransition::as_str)
                .collect(),
        }
    }
}

/// Compiled dashboard templates.
#[derive(Debug)]
pub struct DashboardTemplates {
    environment: Environment<'static>,
}

impl DashboardTemplates {
    /// Compiles the embedded dashboard template.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when the template fails to parse.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut environment = Environment::new();
        environment.add_template(DASHBOARD_NAME, DASHBOARD_SOURCE)?;
        Ok(Self { environment })
    }

    /// Renders the dashboard.
    ///
    /// `tasks` is `None` when the requested filter was not recognized; the
    /// status filter list is rendered either way.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when rendering fails.
    pub fn render_dashboard(
        &self,
        tasks: Option<&[Task]>,
        selected: Option<TaskStatus>,
    ) -> Result<String, minijinja::Error> {
        let task_views: Option<Vec<TaskView<'_>>> =
            tasks.map(|list| list.iter().map(TaskView::from).collect());
        let status_list: Vec<&'static str> = TaskStatus::all().map(TaskStatus::query_key).collect();

        self.environment.get_template(DASHBOARD_NAME)?.render(context! {
            tasks => task_views,
            status_list => status_list,
            selected => selected.map(TaskStatus::query_key),
        })
    }
}
