//! Error types for board domain validation and mutation.

use super::{TaskName, TaskStatus};
use thiserror::Error;

/// Result type for board domain operations.
pub type BoardResult<T> = Result<T, BoardDomainError>;

/// Errors returned while constructing or mutating board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The assignee name is empty after trimming.
    #[error("assignee name must not be empty")]
    EmptyAssigneeName,

    /// A task with the same name already exists somewhere on the board.
    #[error("task '{0}' already exists on the board")]
    DuplicateTask(TaskName),

    /// No task with the given name exists where it was looked up.
    #[error("no task named '{0}' was found")]
    NotFound(TaskName),

    /// A task was asked to depend on itself.
    #[error("task '{0}' cannot depend on itself")]
    SelfDependency(TaskName),

    /// Tasks only move one stage forward at a time.
    #[error("tasks cannot move from \"{from}\" to \"{to}\"")]
    InvalidTransition {
        /// Column the move started from.
        from: TaskStatus,
        /// Column the move was aimed at.
        to: TaskStatus,
    },
}

/// Error returned while parsing a task status label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
