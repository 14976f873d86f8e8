//! Board stages and the status a task takes from the column holding it.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stage of the board a task currently sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task is waiting to be started.
    Backlog,
    /// Task is being worked on.
    InProgress,
    /// Task has been finished.
    Complete,
}

impl TaskStatus {
    /// All stages in pipeline order.
    pub const ALL: [Self; 3] = [Self::Backlog, Self::InProgress, Self::Complete];

    /// Returns the canonical machine representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::InProgress => "in_progress",
            Self::Complete => "complete",
        }
    }

    /// Returns the human-facing column label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::InProgress => "In Progress",
            Self::Complete => "Complete",
        }
    }

    /// Returns the stage a task is forwarded to from this one.
    ///
    /// `Complete` is the last stage and has no successor.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Backlog => Some(Self::InProgress),
            Self::InProgress => Some(Self::Complete),
            Self::Complete => None,
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "backlog" => Ok(Self::Backlog),
            "in_progress" => Ok(Self::InProgress),
            "complete" => Ok(Self::Complete),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
