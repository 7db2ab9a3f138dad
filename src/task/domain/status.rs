//! Task workflow status and the transitions between statuses.

use super::ParseTaskStatusError;
use serde::Serialize;
use std::fmt;

/// Workflow status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskStatus {
    /// Newly created task with work outstanding.
    Open,
    /// Task whose work has been completed.
    Closed,
    /// Previously closed task that needs more work.
    Reopened,
}

impl TaskStatus {
    /// Every status, in declaration order.
    pub const ALL: [Self; 3] = [Self::Open, Self::Closed, Self::Reopened];

    /// Returns the query key used in URLs, display and storage.
    #[must_use]
    pub const fn query_key(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Reopened => "reopened",
        }
    }

    /// Looks up the status whose query key is exactly `key`.
    #[must_use]
    pub fn from_query_key(key: &str) -> Option<Self> {
        Self::all().find(|status| status.query_key() == key)
    }

    /// Enumerates all statuses.
    ///
    /// Each call yields a fresh iterator, so the sequence can be walked as many
    /// times as a caller needs.
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        Self::ALL.into_iter()
    }

    /// Returns whether a `transition` moves a task out of this status.
    #[must_use]
    pub const fn permits(self, transition: TaskTransition) -> bool {
        matches!(
            (self, transition),
            (Self::Open | Self::Reopened, TaskTransition::Close)
                | (Self::Closed, TaskTransition::Reopen)
        )
    }

    /// Lists the transitions that would change a task in this status.
    #[must_use]
    pub fn available_transitions(self) -> Vec<TaskTransition> {
        TaskTransition::ALL
            .into_iter()
            .filter(|transition| self.permits(*transition))
            .collect()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_key())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::from_query_key(&normalized).ok_or_else(|| ParseTaskStatusError(value.to_owned()))
    }
}

/// Status-changing operation on a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskTransition {
    /// Marks an open or reopened task as closed.
    Close,
    /// Reopens a closed task.
    Reopen,
}

impl TaskTransition {
    /// Every transition, in declaration order.
    pub const ALL: [Self; 2] = [Self::Close, Self::Reopen];

    /// Returns the action name used in transition URLs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Close => "close",
            Self::Reopen => "reopen",
        }
    }

    /// Returns the status a task holds once the transition applies.
    #[must_use]
    pub const fn target(self) -> TaskStatus {
        match self {
            Self::Close => TaskStatus::Closed,
            Self::Reopen => TaskStatus::Reopened,
        }
    }

    /// Parses an action name, returning `None` for anything unrecognized.
    #[must_use]
    pub fn from_action(action: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|transition| transition.as_str() == action)
    }
}

impl fmt::Display for TaskTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
