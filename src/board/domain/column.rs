//! Ordered task storage for one board stage.

use super::{Task, TaskName, TaskStatus};
use serde::{Deserialize, Serialize};

/// Ordered container of tasks for a single stage.
///
/// The column enforces no uniqueness; that invariant belongs to the
/// [`Board`](super::Board).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    kind: TaskStatus,
    tasks: Vec<Task>,
}

impl Column {
    /// Creates an empty column for the given stage.
    #[must_use]
    pub const fn new(kind: TaskStatus) -> Self {
        Self {
            kind,
            tasks: Vec::new(),
        }
    }

    /// Returns the stage this column represents.
    #[must_use]
    pub const fn kind(&self) -> TaskStatus {
        self.kind
    }

    /// Returns the column label.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.label()
    }

    /// Returns the tasks in order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the column holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends a task and stamps it with this column's stage.
    pub fn push(&mut self, mut task: Task) {
        task.set_status(self.kind);
        self.tasks.push(task);
    }

    /// Removes every task named `name` and returns the first one removed.
    ///
    /// Returns `None` and leaves the column untouched when nothing matches.
    pub fn remove(&mut self, name: &TaskName) -> Option<Task> {
        let position = self.tasks.iter().position(|task| task.has_name(name))?;
        let removed = self.tasks.remove(position);
        self.tasks.retain(|task| !task.has_name(name));
        Some(removed)
    }

    /// Finds the task named `name`.
    #[must_use]
    pub fn find_match(&self, name: &TaskName) -> Option<&Task> {
        self.tasks.iter().find(|task| task.has_name(name))
    }

    /// Finds the task named `name` for mutation.
    pub fn find_match_mut(&mut self, name: &TaskName) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.has_name(name))
    }

    /// Returns `true` when a task named `name` is held.
    #[must_use]
    pub fn contains(&self, name: &TaskName) -> bool {
        self.find_match(name).is_some()
    }

    /// Removes every task.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub(super) fn tasks_mut(&mut self) -> impl Iterator<Item = &mut Task> {
        self.tasks.iter_mut()
    }
}
