//! Board aggregate owning the three stage columns.

use super::{AssigneeName, BoardDomainError, BoardResult, Column, Task, TaskName, TaskStatus};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Kanban board with one column per [`TaskStatus`].
///
/// Every cross-column operation goes through the board, which keeps task
/// names unique across all three columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    backlog: Column,
    in_progress: Column,
    complete: Column,
    next_display_id: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            backlog: Column::new(TaskStatus::Backlog),
            in_progress: Column::new(TaskStatus::InProgress),
            complete: Column::new(TaskStatus::Complete),
            next_display_id: 1,
        }
    }

    /// Returns the backlog column.
    #[must_use]
    pub const fn backlog(&self) -> &Column {
        &self.backlog
    }

    /// Returns the in-progress column.
    #[must_use]
    pub const fn in_progress(&self) -> &Column {
        &self.in_progress
    }

    /// Returns the complete column.
    #[must_use]
    pub const fn complete(&self) -> &Column {
        &self.complete
    }

    /// Returns the column for a stage.
    #[must_use]
    pub const fn column(&self, kind: TaskStatus) -> &Column {
        match kind {
            TaskStatus::Backlog => &self.backlog,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Complete => &self.complete,
        }
    }

    const fn column_mut(&mut self, kind: TaskStatus) -> &mut Column {
        match kind {
            TaskStatus::Backlog => &mut self.backlog,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Complete => &mut self.complete,
        }
    }

    /// Returns the columns in search order: backlog, in progress, complete.
    #[must_use]
    pub const fn columns(&self) -> [&Column; 3] {
        [&self.backlog, &self.in_progress, &self.complete]
    }

    fn columns_mut(&mut self) -> [&mut Column; 3] {
        [&mut self.backlog, &mut self.in_progress, &mut self.complete]
    }

    /// Returns the number of tasks across all columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns().iter().map(|column| column.len()).sum()
    }

    /// Returns `true` when no column holds a task.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns().iter().all(|column| column.is_empty())
    }

    /// Returns `true` when a task named `name` is in any column.
    #[must_use]
    pub fn contains_task(&self, name: &TaskName) -> bool {
        self.columns().iter().any(|column| column.contains(name))
    }

    /// Finds a task by name, searching backlog, in progress, then complete.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::NotFound`] when no column holds the task.
    pub fn find_match(&self, name: &TaskName) -> BoardResult<&Task> {
        self.columns()
            .into_iter()
            .find_map(|column| column.find_match(name))
            .ok_or_else(|| BoardDomainError::NotFound(name.clone()))
    }

    fn find_match_mut(&mut self, name: &TaskName) -> BoardResult<&mut Task> {
        self.columns_mut()
            .into_iter()
            .find_map(|column| column.find_match_mut(name))
            .ok_or_else(|| BoardDomainError::NotFound(name.clone()))
    }

    /// Returns the stage of the column holding the task, if any.
    #[must_use]
    pub fn status_of(&self, name: &TaskName) -> Option<TaskStatus> {
        self.columns()
            .into_iter()
            .find(|column| column.contains(name))
            .map(Column::kind)
    }

    /// Adds a task to the end of the backlog and assigns its display number.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateTask`] when a task with the same
    /// name exists in any column; the board is left unchanged.
    pub fn add_to_backlog(&mut self, mut task: Task) -> BoardResult<()> {
        if self.contains_task(task.name()) {
            return Err(BoardDomainError::DuplicateTask(task.name().clone()));
        }
        task.set_display_id(self.next_display_id);
        self.next_display_id = self.next_display_id.saturating_add(1);
        self.backlog.push(task);
        Ok(())
    }

    /// Removes a task from whichever column holds it.
    ///
    /// Every remaining task holding an edge to the removed task's
    /// identifier loses that dependency. Edges to a different task that
    /// happens to share the name are kept.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::NotFound`] when no column holds the task.
    pub fn remove(&mut self, name: &TaskName, clock: &impl Clock) -> BoardResult<Task> {
        let removed = self
            .columns_mut()
            .into_iter()
            .find_map(|column| column.remove(name))
            .ok_or_else(|| BoardDomainError::NotFound(name.clone()))?;

        let removed_id = removed.id();
        for column in self.columns_mut() {
            for task in column.tasks_mut() {
                task.forget_dependency(removed_id, clock);
            }
        }
        Ok(removed)
    }

    /// Assigns a user to a task.
    ///
    /// Returns `false` when the user was already assigned.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::NotFound`] when the task is absent.
    pub fn add_assignee(
        &mut self,
        task: &TaskName,
        assignee: AssigneeName,
        clock: &impl Clock,
    ) -> BoardResult<bool> {
        Ok(self.find_match_mut(task)?.add_assignee(assignee, clock))
    }

    /// Unassigns a user from a task.
    ///
    /// Returns `false` when the user was not assigned.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::NotFound`] when the task is absent.
    pub fn remove_assignee(
        &mut self,
        task: &TaskName,
        assignee: &AssigneeName,
        clock: &impl Clock,
    ) -> BoardResult<bool> {
        Ok(self.find_match_mut(task)?.remove_assignee(assignee, clock))
    }

    /// Makes `parent` depend on `child`.
    ///
    /// The parent stops being primitive. Returns `false` when the dependency
    /// already existed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::SelfDependency`] when both names are
    /// equal, or [`BoardDomainError::NotFound`] naming the first of parent
    /// and child that is absent.
    pub fn add_dependency(
        &mut self,
        parent: &TaskName,
        child: &TaskName,
        clock: &impl Clock,
    ) -> BoardResult<bool> {
        if parent == child {
            return Err(BoardDomainError::SelfDependency(parent.clone()));
        }
        if !self.contains_task(parent) {
            return Err(BoardDomainError::NotFound(parent.clone()));
        }
        let child_ref = self.find_match(child)?.reference();
        Ok(self.find_match_mut(parent)?.add_dependency(child_ref, clock))
    }

    /// Removes `child` from the dependencies of `parent`.
    ///
    /// The child does not need to be on the board any more. Returns `false`
    /// when the parent did not depend on the child.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::NotFound`] when the parent is absent.
    pub fn remove_dependency(
        &mut self,
        parent: &TaskName,
        child: &TaskName,
        clock: &impl Clock,
    ) -> BoardResult<bool> {
        Ok(self.find_match_mut(parent)?.remove_dependency(child, clock))
    }

    /// Moves a task named `name` from column `from` to the end of column `to`.
    ///
    /// `to` must be the stage directly after `from`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidTransition`] for any other pair of
    /// columns, or [`BoardDomainError::NotFound`] when `from` does not hold
    /// the task. No column is modified in either case.
    pub fn forward(
        &mut self,
        name: &TaskName,
        from: TaskStatus,
        to: TaskStatus,
        clock: &impl Clock,
    ) -> BoardResult<()> {
        if from.next() != Some(to) {
            return Err(BoardDomainError::InvalidTransition { from, to });
        }
        let mut task = self
            .column_mut(from)
            .remove(name)
            .ok_or_else(|| BoardDomainError::NotFound(name.clone()))?;
        task.touch(clock);
        self.column_mut(to).push(task);
        Ok(())
    }

    /// Moves a task from the backlog to in progress.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::NotFound`] when the backlog does not hold
    /// the task.
    pub fn start(&mut self, name: &TaskName, clock: &impl Clock) -> BoardResult<()> {
        self.forward(name, TaskStatus::Backlog, TaskStatus::InProgress, clock)
    }

    /// Moves a task from in progress to complete.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::NotFound`] when the in-progress column
    /// does not hold the task.
    pub fn complete_task(&mut self, name: &TaskName, clock: &impl Clock) -> BoardResult<()> {
        self.forward(name, TaskStatus::InProgress, TaskStatus::Complete, clock)
    }

    /// Empties every column and restarts display numbering.
    ///
    /// Returns the number of tasks discarded.
    pub fn clear_board(&mut self) -> usize {
        let discarded = self.len();
        for column in self.columns_mut() {
            column.clear();
        }
        self.next_display_id = 1;
        discarded
    }
}
