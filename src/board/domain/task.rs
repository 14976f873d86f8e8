//! Task entity and dependency references.

use super::{AssigneeName, TaskId, TaskName, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to a task used as a dependency edge.
///
/// Carries the internal identifier alongside the name so edges survive
/// independently of where the referenced task is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskRef {
    id: TaskId,
    name: TaskName,
}

impl TaskRef {
    /// Returns the referenced task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the referenced task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }
}

impl fmt::Display for TaskRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One unit of work on the board.
///
/// Equality via [`PartialEq`] compares every field; use [`Task::matches`]
/// for the name-based identity the board relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: TaskName,
    creator: Option<String>,
    display_id: Option<u64>,
    status: Option<TaskStatus>,
    assignees: Vec<AssigneeName>,
    dependencies: Vec<TaskRef>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task that is not yet placed on a board.
    #[must_use]
    pub fn new(name: TaskName, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            name,
            creator: None,
            display_id: None,
            status: None,
            assignees: Vec::new(),
            dependencies: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Records who created the task.
    #[must_use]
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    /// Returns the internal task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the name of the user who created the task, if known.
    #[must_use]
    pub fn creator(&self) -> Option<&str> {
        self.creator.as_deref()
    }

    /// Returns the display number assigned by the board, if any.
    #[must_use]
    pub const fn display_id(&self) -> Option<u64> {
        self.display_id
    }

    /// Returns the stage of the column holding the task.
    ///
    /// `None` until a column takes ownership of the task.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the assignees in insertion order.
    #[must_use]
    pub fn assignees(&self) -> &[AssigneeName] {
        &self.assignees
    }

    /// Returns the dependencies in insertion order.
    #[must_use]
    pub fn dependencies(&self) -> &[TaskRef] {
        &self.dependencies
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when the task has no dependencies.
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// Returns a dependency reference to this task.
    #[must_use]
    pub fn reference(&self) -> TaskRef {
        TaskRef {
            id: self.id,
            name: self.name.clone(),
        }
    }

    /// Returns `true` when both tasks carry the same name.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.name == other.name
    }

    /// Returns `true` when the task is named `name`.
    #[must_use]
    pub fn has_name(&self, name: &TaskName) -> bool {
        &self.name == name
    }

    /// Returns `true` when `name` is one of the task's dependencies.
    #[must_use]
    pub fn depends_on(&self, name: &TaskName) -> bool {
        self.dependencies.iter().any(|dependency| &dependency.name == name)
    }

    /// Returns `true` when `assignee` is assigned to the task.
    #[must_use]
    pub fn is_assigned(&self, assignee: &AssigneeName) -> bool {
        self.assignees.contains(assignee)
    }

    /// Adds a dependency.
    ///
    /// No cycle detection is performed. A dependency whose name is already
    /// present is ignored. Returns whether the dependency set changed.
    pub fn add_dependency(&mut self, dependency: TaskRef, clock: &impl Clock) -> bool {
        if self.depends_on(&dependency.name) {
            return false;
        }
        self.dependencies.push(dependency);
        self.touch(clock);
        true
    }

    /// Removes every dependency named `name`.
    ///
    /// Returns whether the dependency set changed.
    pub fn remove_dependency(&mut self, name: &TaskName, clock: &impl Clock) -> bool {
        let before = self.dependencies.len();
        self.dependencies.retain(|dependency| &dependency.name != name);
        let changed = self.dependencies.len() != before;
        if changed {
            self.touch(clock);
        }
        changed
    }

    /// Drops every edge pointing at the task identified by `id`.
    pub(super) fn forget_dependency(&mut self, id: TaskId, clock: &impl Clock) {
        let before = self.dependencies.len();
        self.dependencies.retain(|dependency| dependency.id != id);
        if self.dependencies.len() != before {
            self.touch(clock);
        }
    }

    /// Assigns a user to the task.
    ///
    /// Returns `false` when the user was already assigned.
    pub fn add_assignee(&mut self, assignee: AssigneeName, clock: &impl Clock) -> bool {
        if self.is_assigned(&assignee) {
            return false;
        }
        self.assignees.push(assignee);
        self.touch(clock);
        true
    }

    /// Unassigns a user from the task.
    ///
    /// Returns `false` when the user was not assigned.
    pub fn remove_assignee(&mut self, assignee: &AssigneeName, clock: &impl Clock) -> bool {
        let before = self.assignees.len();
        self.assignees.retain(|existing| existing != assignee);
        let changed = self.assignees.len() != before;
        if changed {
            self.touch(clock);
        }
        changed
    }

    pub(super) const fn set_status(&mut self, status: TaskStatus) {
        self.status = Some(status);
    }

    pub(super) const fn set_display_id(&mut self, display_id: u64) {
        self.display_id = Some(display_id);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    pub(super) fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let assignees = self
            .assignees
            .iter()
            .map(AssigneeName::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        match self.display_id {
            Some(display_id) => write!(f, "[id: {display_id}, ")?,
            None => f.write_str("[id: -, ")?,
        }
        write!(f, "name: \"{}\", assignees: {assignees}]", self.name)
    }
}
