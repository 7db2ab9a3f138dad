//! Domain model for the task workflow.
//!
//! Tasks move between a closed set of statuses through the `close` and
//! `reopen` transitions. Persistence and presentation concerns stay outside
//! the domain boundary.

mod error;
mod ids;
mod status;
mod task;

pub use error::ParseTaskStatusError;
pub use ids::TaskId;
pub use status::{TaskStatus, TaskTransition};
pub use task::{NewTask, PersistedTaskData, Task, TaskDetails};
