//! Application services for task workflow orchestration.

mod workflow;

pub use workflow::{
    CreateTaskRequest, TaskWorkflowError, TaskWorkflowResult, TaskWorkflowService,
    UpdateTaskRequest,
};
