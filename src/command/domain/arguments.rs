//! Typed arguments for the commands that take more than a task name.

use super::{CommandError, KanbotCommand};
use serde::{Deserialize, Serialize};

/// Discriminator shared by `assign` and `depend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeAction {
    /// Add the assignee or dependency.
    Add,
    /// Remove the assignee or dependency.
    Remove,
}

impl ChangeAction {
    /// Parses the literal `add` or `remove`, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::UnrecognizedArgument`] for any other value.
    pub fn parse(
        value: &str,
        command: KanbotCommand,
        position: usize,
    ) -> Result<Self, CommandError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "remove" => Ok(Self::Remove),
            _ => Err(CommandError::UnrecognizedArgument {
                command,
                position,
                value: value.to_owned(),
            }),
        }
    }
}

/// Arguments of `assign <task> add|remove <assignee>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignArguments {
    /// Task to change.
    pub task: String,
    /// Whether the assignee is added or removed.
    pub action: ChangeAction,
    /// User being assigned or unassigned.
    pub assignee: String,
}

/// Arguments of `depend add|remove <child> <parent>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependArguments {
    /// Whether the dependency is added or removed.
    pub action: ChangeAction,
    /// Task that must finish first.
    pub child: String,
    /// Task that depends on the child.
    pub parent: String,
}
